//! Path and file name resolution for generated artifacts

use std::path::{Path, PathBuf};

use crate::request::ScaffoldRequest;

use super::kind::ArtifactKind;

/// Directory layout of one run: `<output>/<module>/<source_root>/<ns1>/<ns2>/<package>/...`
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    package_root: String,
    package_dir: PathBuf,
}

impl Layout {
    pub fn new(output_dir: &Path, source_root: &Path, request: &ScaffoldRequest) -> Self {
        let [first, second] = request.namespace.segments();
        let root = output_dir
            .join(&request.module)
            .join(source_root)
            .join(first)
            .join(second);

        Self {
            package_dir: root.join(&request.package),
            package_root: format!("{}.{}", request.namespace, request.package),
            root,
        }
    }

    /// Namespace root directory (`.../src/main/java/com/example`)
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory that holds the file of `kind`
    pub fn directory(&self, kind: ArtifactKind) -> PathBuf {
        kind.package_segments()
            .iter()
            .fold(self.package_dir.clone(), |dir, segment| dir.join(segment))
    }

    /// Java package declared by the file of `kind`
    pub fn java_package(&self, kind: ArtifactKind) -> String {
        let mut package = self.package_root.clone();
        for segment in kind.package_segments() {
            package.push('.');
            package.push_str(segment);
        }
        package
    }

    /// Directory and file name for `kind`
    pub fn target(&self, kind: ArtifactKind, class_name: &str) -> (PathBuf, String) {
        (self.directory(kind), kind.file_name(class_name))
    }
}
