//! Template renderer for the generated Go source.
//! The output layout is a fixed template rendered with MiniJinja; this
//! module does no I/O.
use crate::entry::Entry;
use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, TimeZone};
use minijinja::Environment;
use serde::Serialize;

/// Layout of the generated file. Each entry is preceded by a blank line
/// and its comment line is skipped when empty.
pub const GO_SOURCE_TEMPLATE: &str = "// Generated code. DO NOT EDIT.
// Generated on {{ timestamp }}

package {{ package }}
{% for entry in entries %}
{% if entry.comment %}// {{ entry.comment }}
{% endif %}const {{ entry.name }} = `{{ entry.content }}`
{% endfor %}";

/// Everything needed to render the output file.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationContext {
    /// RFC 3339 generation time
    pub timestamp: String,
    /// Go package of the generated file
    pub package: String,
    /// Constants in input order
    pub entries: Vec<Entry>,
}

impl GenerationContext {
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>, package: &str, entries: Vec<Entry>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            package: package.to_string(),
            entries,
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance.
    ///
    /// Auto-escaping is off so content reaches the output verbatim.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to compile or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_str(template, context)
            .map_err(Error::MinijinjaError)
    }
}

/// Renders the generated Go source for `context`.
///
/// # Errors
/// * `Error::SerializationError` if the context cannot be converted
/// * `Error::MinijinjaError` if rendering fails
pub fn render_source(engine: &dyn TemplateRenderer, context: &GenerationContext) -> Result<String> {
    let value = serde_json::to_value(context)?;
    engine.render(GO_SOURCE_TEMPLATE, &value)
}
