//! Template renderer - handlebars in strict mode, no escaping

use std::fmt;

use handlebars::{Handlebars, RenderErrorReason};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::request::ScaffoldRequest;

use super::kind::ArtifactKind;
use super::naming::{to_lower_name, to_table_name};

/// Named placeholder understood by the templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Namespace,
    Package,
    ClassName,
    LowerClassName,
    TableName,
    CorePackage,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Namespace,
        Placeholder::Package,
        Placeholder::ClassName,
        Placeholder::LowerClassName,
        Placeholder::TableName,
        Placeholder::CorePackage,
    ];

    /// Literal token as it appears in template text
    pub fn token(self) -> &'static str {
        match self {
            Self::Namespace => "{{namespace}}",
            Self::Package => "{{package}}",
            Self::ClassName => "{{ClassName}}",
            Self::LowerClassName => "{{className}}",
            Self::TableName => "{{TableName}}",
            Self::CorePackage => "{{corePackage}}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Values substituted into every template of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub namespace: String,
    pub package: String,
    #[serde(rename = "ClassName")]
    pub class_name: String,
    #[serde(rename = "className")]
    pub lower_class_name: String,
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "corePackage")]
    pub core_package: String,
}

impl RenderContext {
    /// Derive the full substitution set from a request
    pub fn from_request(request: &ScaffoldRequest, core_package: &str) -> Self {
        Self {
            namespace: request.namespace.to_string(),
            package: request.package.clone(),
            class_name: request.class_name.clone(),
            lower_class_name: to_lower_name(&request.class_name),
            table_name: to_table_name(&request.class_name),
            core_package: core_package.to_string(),
        }
    }

    fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Namespace => &self.namespace,
            Placeholder::Package => &self.package,
            Placeholder::ClassName => &self.class_name,
            Placeholder::LowerClassName => &self.lower_class_name,
            Placeholder::TableName => &self.table_name,
            Placeholder::CorePackage => &self.core_package,
        }
    }

    /// Every placeholder used by `template` must have a non-empty value
    fn check_values(&self, kind: ArtifactKind, template: &str) -> Result<()> {
        for placeholder in Placeholder::ALL {
            if template.contains(placeholder.token()) && self.value(placeholder).trim().is_empty()
            {
                return Err(ScaffoldError::MissingValue { kind, placeholder });
            }
        }
        Ok(())
    }
}

/// Renders the ten artifact templates, registered once under their kind names
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Create a renderer with every kind's template registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        // Unknown placeholders are errors, not empty strings
        handlebars.set_strict_mode(true);

        for kind in ArtifactKind::ALL {
            handlebars
                .register_template_string(&kind.to_string(), kind.template())
                .map_err(|e| ScaffoldError::TemplateError(format!("{kind}: {e}")))?;
        }

        Ok(Self { handlebars })
    }

    /// Render the registered template of `kind` against `context`
    pub fn render(&self, kind: ArtifactKind, context: &RenderContext) -> Result<String> {
        context.check_values(kind, kind.template())?;
        let rendered = self
            .handlebars
            .render(&kind.to_string(), context)
            .map_err(|e| render_error(kind, e))?;

        debug!("Rendered {} ({} bytes)", kind, rendered.len());
        Ok(rendered)
    }

    /// Render arbitrary template text, attributing errors to `kind`
    pub fn render_template(
        &self,
        kind: ArtifactKind,
        template: &str,
        context: &RenderContext,
    ) -> Result<String> {
        context.check_values(kind, template)?;
        self.handlebars
            .render_template(template, context)
            .map_err(|e| render_error(kind, e))
    }
}

fn render_error(kind: ArtifactKind, err: handlebars::RenderError) -> ScaffoldError {
    match err.reason() {
        RenderErrorReason::MissingVariable(Some(path)) => ScaffoldError::UnresolvedPlaceholder {
            kind,
            token: format!("{{{{{path}}}}}"),
        },
        _ => ScaffoldError::TemplateError(format!("{kind}: {err}")),
    }
}
