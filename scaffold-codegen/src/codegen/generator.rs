//! Main scaffold generator orchestrator

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::request::ScaffoldRequest;

use super::kind::ArtifactKind;
use super::layout::Layout;
use super::renderer::{RenderContext, Renderer};
use super::writer::write_file;

/// One rendered artifact and where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: ArtifactKind,
    pub java_package: String,
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    /// Directory containing the file
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// File name without directory
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Renders and writes every artifact kind for one request
pub struct ScaffoldGenerator<'a> {
    config: &'a ScaffoldConfig,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a new generator with the given configuration
    pub fn new(config: &'a ScaffoldConfig) -> Self {
        Self { config }
    }

    /// Generate all artifacts, one kind at a time.
    ///
    /// Files written before a failure are left in place. In dry-run mode
    /// nothing touches the file system.
    pub fn generate(&self, request: &ScaffoldRequest) -> Result<Vec<GeneratedFile>> {
        let layout = Layout::new(&self.config.output_dir, &self.config.source_root, request);
        let context = RenderContext::from_request(request, &self.config.core_package);
        let renderer = Renderer::new()?;
        info!(
            "Generating {} for table '{}' under {:?}",
            request.class_name,
            context.table_name,
            layout.root()
        );

        let mut generated = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let (dir, file_name) = layout.target(kind, &request.class_name);
            debug!("Generating {} -> {}", kind, file_name);

            let content = renderer.render(kind, &context)?;
            let path = if self.config.dry_run {
                dir.join(&file_name)
            } else {
                write_file(&dir, &file_name, &content)?
            };

            generated.push(GeneratedFile {
                kind,
                java_package: layout.java_package(kind),
                path,
                content,
            });
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Namespace;
    use std::fs;

    fn request(class_name: &str, package: &str) -> ScaffoldRequest {
        ScaffoldRequest::new(
            "core",
            class_name,
            package,
            Namespace::parse("com.example").unwrap(),
        )
        .unwrap()
    }

    fn config_in(dir: &Path) -> ScaffoldConfig {
        ScaffoldConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generates_ten_files() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let files = ScaffoldGenerator::new(&config)
            .generate(&request("Order", "orders"))
            .unwrap();

        assert_eq!(files.len(), 10);
        for file in &files {
            assert!(file.path.is_file(), "missing {}", file.path.display());
            assert_eq!(fs::read_to_string(&file.path).unwrap(), file.content);
        }
    }

    #[test]
    fn test_entity_location_and_table_name() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let files = ScaffoldGenerator::new(&config)
            .generate(&request("Order", "orders"))
            .unwrap();

        let entity = &files[0];
        assert_eq!(entity.kind, ArtifactKind::Entity);
        assert_eq!(
            entity.path,
            tmp.path()
                .join("core/src/main/java/com/example/orders/model/Order.java")
        );
        assert_eq!(entity.file_name(), "Order.java");
        assert!(entity.content.contains("@Table(name = \"order\")"));
    }

    #[test]
    fn test_package_declaration_matches_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let files = ScaffoldGenerator::new(&config)
            .generate(&request("UserAccount", "accounts"))
            .unwrap();

        for file in &files {
            let declaration = format!("package {};", file.java_package);
            assert!(
                file.content.starts_with(&declaration),
                "{} should start with {declaration}",
                file.kind
            );
        }
    }

    #[test]
    fn test_implementations_share_interface_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let files = ScaffoldGenerator::new(&config)
            .generate(&request("Order", "orders"))
            .unwrap();
        let dir_of = |kind: ArtifactKind| {
            files
                .iter()
                .find(|f| f.kind == kind)
                .map(|f| f.directory().to_path_buf())
                .unwrap()
        };

        assert_eq!(dir_of(ArtifactKind::DaoImpl), dir_of(ArtifactKind::Dao));
        assert_eq!(dir_of(ArtifactKind::ServiceImpl), dir_of(ArtifactKind::Service));
        assert!(!tmp.path().join("core/src/main/java/com/example/orders/dao/impl").exists());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let generator = ScaffoldGenerator::new(&config);

        let first = generator.generate(&request("Order", "orders")).unwrap();
        let second = generator.generate(&request("Order", "orders")).unwrap();

        assert_eq!(first, second);
        for file in &second {
            assert_eq!(fs::read_to_string(&file.path).unwrap(), file.content);
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig {
            dry_run: true,
            ..config_in(tmp.path())
        };

        let files = ScaffoldGenerator::new(&config)
            .generate(&request("Order", "orders"))
            .unwrap();

        assert_eq!(files.len(), 10);
        assert!(!tmp.path().join("core").exists());
    }

    #[test]
    fn test_failure_keeps_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let package_dir = tmp.path().join("core/src/main/java/com/example/orders");
        fs::create_dir_all(&package_dir).unwrap();
        // A plain file where the transformer directory should go
        fs::write(package_dir.join("transformer"), "").unwrap();

        let result = ScaffoldGenerator::new(&config).generate(&request("Order", "orders"));

        assert!(result.is_err());
        assert!(package_dir.join("model/Order.java").is_file());
        assert!(package_dir.join("dto/OrderDto.java").is_file());
        assert!(!package_dir.join("controller").exists());
    }

    #[test]
    fn test_core_package_is_configurable() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig {
            core_package: "platformcore".into(),
            ..config_in(tmp.path())
        };

        let files = ScaffoldGenerator::new(&config)
            .generate(&request("Order", "orders"))
            .unwrap();

        assert!(files[0]
            .content
            .contains("import com.example.platformcore.model.AbstractEntity;"));
    }
}
