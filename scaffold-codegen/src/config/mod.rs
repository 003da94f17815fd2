//! Configuration for scaffold-codegen

pub mod defaults;
mod settings;

pub use settings::*;
