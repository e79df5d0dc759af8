//! Template rendering for scaffold bodies with MiniJinja.
//!
//! The helper set is owned by the renderer instance rather than a global
//! function registry, so independent renderers can carry different helpers
//! and be used concurrently without shared state.

use crate::error::Result;
use cruet::Inflector;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// Rendering must have no side effects beyond producing the expanded
    /// text; in particular no filesystem access happens here.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Besides the builtin filters (`replace`, `lower`, `upper`, `title`,
/// `trim`, ...) the environment registers:
///
/// * `pascal_case` filter - `"field_name" | pascal_case` -> `FieldName`
/// * `camel_case` filter - `"field_name" | camel_case` -> `fieldName`
/// * `filename(name)` function - emits a file/folder name as-is
/// * `filename_lower(name)` function - emits a file/folder name lowercased
///
/// The `filename` helpers are what scanned templates call for placeholder
/// path segments (see [`crate::scanner`]). Literal `{{` / `}}` sequences in
/// generated output are produced with `{% raw %}` blocks.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the default helper set.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("pascal_case", |value: String| value.to_pascal_case());
        env.add_filter("camel_case", |value: String| value.to_camel_case());
        env.add_function("filename", |name: String| name);
        env.add_function("filename_lower", |name: String| name.to_lowercase());
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("body", template)?;

        let tmpl = env.get_template("body")?;

        Ok(tmpl.render(context)?)
    }
}
