//! scaffold-codegen: Generate a layered Spring/JPA class set from a class name
//!
//! Given a module, a class name, a package and an optional namespace, this
//! crate renders ten Java sources into the Maven layout
//! `<module>/src/main/java/<ns1>/<ns2>/<package>/`:
//!
//! - `model/<Class>.java` (JPA entity with the snake_case table name)
//! - `dto/<Class>Dto.java`
//! - `transformer/mapper/<Class>Mapper.java` and `transformer/<Class>Transformer.java`
//! - `dao/repo/<Class>Repo.java`, `dao/<Class>Dao.java`, `dao/<Class>DaoImpl.java`
//! - `service/<Class>Service.java`, `service/<Class>ServiceImpl.java`
//! - `controller/<Class>Controller.java`
//!
//! Existing files are overwritten, so re-running is always safe.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! let files = scaffold_codegen::ScaffoldBuilder::new("core", "Order", "orders")
//!     .namespace("com.example")
//!     .output_dir("..")
//!     .generate()
//!     .expect("Failed to generate scaffold");
//!
//! for file in &files {
//!     println!("{}", file.path.display());
//! }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! scaffold-codegen core Order orders com.example
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod request;

use std::path::Path;

use tracing::info;

pub use codegen::{ArtifactKind, GeneratedFile};
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use request::{Namespace, ScaffoldRequest};

/// Main entry point for scaffold generation
pub fn generate(request: &ScaffoldRequest, config: &ScaffoldConfig) -> Result<Vec<GeneratedFile>> {
    let files = codegen::ScaffoldGenerator::new(config).generate(request)?;
    info!("Scaffold generation complete ({} files)", files.len());
    Ok(files)
}

/// Builder pattern for driving generation from code or tests
pub struct ScaffoldBuilder {
    module: String,
    class_name: String,
    package: String,
    namespace: Option<String>,
    config: ScaffoldConfig,
}

impl ScaffoldBuilder {
    /// Create a new builder for one class
    pub fn new(module: &str, class_name: &str, package: &str) -> Self {
        Self {
            module: module.to_string(),
            class_name: class_name.to_string(),
            package: package.to_string(),
            namespace: None,
            config: ScaffoldConfig::default(),
        }
    }

    /// Replace the base configuration (call before the other setters)
    pub fn config(mut self, config: ScaffoldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the namespace (defaults to the configured one)
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    /// Set the base directory the module directory is created in
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the source root below the module directory
    pub fn source_root(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.source_root = dir.as_ref().to_path_buf();
        self
    }

    /// Set the base library package the templates import from
    pub fn core_package(mut self, package: &str) -> Self {
        self.config.core_package = package.to_string();
        self
    }

    /// Enable dry run mode (render without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Generate the scaffold
    pub fn generate(self) -> Result<Vec<GeneratedFile>> {
        self.config.validate()?;
        let namespace =
            Namespace::parse(self.namespace.as_deref().unwrap_or(&self.config.namespace))?;
        let request = ScaffoldRequest::new(self.module, self.class_name, self.package, namespace)?;
        generate(&request, &self.config)
    }
}
