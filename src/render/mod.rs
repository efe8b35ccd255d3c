//! HTML rendering: inject the graph JSON into a visualization template.

use std::path::Path;

use crate::error::{Result, ValueGraphError};

/// Placeholder replaced by the graph JSON.
pub const DEFAULT_PLACEHOLDER: &str = "REPLACE_ME";

const BUILTIN_TEMPLATE: &str = include_str!("../../assets/template.html");

/// Visualization template with a single injection point.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    placeholder: String,
}

impl Template {
    /// Bundled D3 force-layout page.
    pub fn builtin() -> Self {
        Self::from_source(BUILTIN_TEMPLATE, DEFAULT_PLACEHOLDER)
    }

    pub fn from_source(source: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Read a template from disk.
    pub fn from_path(path: &Path, placeholder: &str) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            ValueGraphError::Template(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(Self::from_source(source, placeholder))
    }

    /// `path` when given, the built-in template otherwise.
    pub fn load(path: Option<&Path>, placeholder: &str) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Using template {}", path.display());
                Self::from_path(path, placeholder)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the first occurrence of the placeholder with `graph_json`.
    pub fn render(&self, graph_json: &str) -> Result<String> {
        if self.placeholder.is_empty() || !self.source.contains(&self.placeholder) {
            return Err(ValueGraphError::Template(format!(
                "template does not contain placeholder '{}'",
                self.placeholder
            )));
        }
        Ok(self
            .source
            .replacen(&self.placeholder, &script_safe(graph_json), 1))
    }
}

/// Keep a key such as `</script>` from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
