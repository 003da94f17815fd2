//! Invocation parameters for a single generation run

use std::fmt;

use tracing::warn;

use crate::error::{Result, ScaffoldError};

/// Validated namespace identifier (reverse-domain package prefix).
///
/// Only the first two dot-separated segments are used, both for the directory
/// layout and for the Java package declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    root: [String; 2],
}

impl Namespace {
    /// Parse a dot-separated namespace such as `com.example`
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<&str> = raw.trim().split('.').collect();
        if segments.len() < 2 || !segments.iter().all(|s| is_java_identifier(s.trim())) {
            return Err(ScaffoldError::InvalidNamespace(raw.to_string()));
        }
        if segments.len() > 2 {
            warn!(
                "Namespace '{}' has {} segments; only '{}.{}' is used",
                raw,
                segments.len(),
                segments[0],
                segments[1]
            );
        }

        Ok(Self {
            root: [segments[0].trim().to_string(), segments[1].trim().to_string()],
        })
    }

    /// The two segments that become directory levels
    pub fn segments(&self) -> [&str; 2] {
        [&self.root[0], &self.root[1]]
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.root[0], self.root[1])
    }
}

/// ASCII Java identifier: a letter or `_`, then letters, digits or `_`
fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// What to generate: one class in one package of one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Module directory the sources are written into
    pub module: String,

    /// PascalCase class name, used as given
    pub class_name: String,

    /// Feature package below the namespace (no dots)
    pub package: String,

    /// Namespace root
    pub namespace: Namespace,
}

impl ScaffoldRequest {
    /// Build and validate a request
    pub fn new(
        module: impl Into<String>,
        class_name: impl Into<String>,
        package: impl Into<String>,
        namespace: Namespace,
    ) -> Result<Self> {
        let request = Self {
            module: module.into(),
            class_name: class_name.into(),
            package: package.into(),
            namespace,
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<()> {
        if self.module.trim().is_empty() {
            return Err(ScaffoldError::ValidationError(
                "module name must not be empty".into(),
            ));
        }
        if self.class_name.trim().is_empty() {
            return Err(ScaffoldError::ValidationError(
                "class name must not be empty".into(),
            ));
        }
        if self.class_name.contains(['/', '\\']) {
            return Err(ScaffoldError::ValidationError(format!(
                "class name '{}' must not contain path separators",
                self.class_name
            )));
        }
        if self.package.trim().is_empty() {
            return Err(ScaffoldError::ValidationError(
                "package name must not be empty".into(),
            ));
        }
        if !is_java_identifier(&self.package) {
            return Err(ScaffoldError::ValidationError(format!(
                "package name '{}' must be a single Java identifier",
                self.package
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Namespace {
        Namespace::parse("com.example").unwrap()
    }

    #[test]
    fn test_namespace_two_segments() {
        let ns = Namespace::parse("com.example").unwrap();
        assert_eq!(ns.segments(), ["com", "example"]);
        assert_eq!(ns.to_string(), "com.example");
    }

    #[test]
    fn test_namespace_extra_segments_are_ignored() {
        let ns = Namespace::parse("org.acme.platform").unwrap();
        assert_eq!(ns.segments(), ["org", "acme"]);
    }

    #[test]
    fn test_namespace_rejects_short_or_empty_segments() {
        for raw in ["example", "", "com.", ".example", "com..example"] {
            assert!(
                matches!(Namespace::parse(raw), Err(ScaffoldError::InvalidNamespace(_))),
                "should reject {raw:?}"
            );
        }
    }

    #[test]
    fn test_namespace_rejects_non_identifier_segments() {
        for raw in [
            "com.{{package}}",
            "com.my-corp",
            "1com.example",
            "com.ex ample",
            "org.acme.{{x}}",
        ] {
            assert!(
                matches!(Namespace::parse(raw), Err(ScaffoldError::InvalidNamespace(_))),
                "should reject {raw:?}"
            );
        }
        assert!(Namespace::parse("_internal.acme2").is_ok());
    }

    #[test]
    fn test_request_accepts_valid_input() {
        let request = ScaffoldRequest::new("core", "Order", "orders", example()).unwrap();
        assert_eq!(request.module, "core");
        assert_eq!(request.class_name, "Order");
        assert_eq!(request.package, "orders");
    }

    #[test]
    fn test_request_rejects_empty_fields() {
        assert!(ScaffoldRequest::new("", "Order", "orders", example()).is_err());
        assert!(ScaffoldRequest::new("core", " ", "orders", example()).is_err());
        assert!(ScaffoldRequest::new("core", "Order", "", example()).is_err());
    }

    #[test]
    fn test_request_rejects_dotted_package() {
        let err = ScaffoldRequest::new("core", "Order", "orders.admin", example()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ValidationError(_)));
        assert!(ScaffoldRequest::new("core", "Order", "{{namespace}}", example()).is_err());
    }
}
