//! Code generation module

mod generator;
mod kind;
mod layout;
mod naming;
mod renderer;
mod templates;
mod writer;

pub use generator::*;
pub use kind::*;
pub use layout::*;
pub use naming::*;
pub use renderer::*;
pub use writer::*;
