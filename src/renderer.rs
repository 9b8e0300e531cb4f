//! Template rendering for generated components.
//! Templated bodies go through MiniJinja; literal bodies are returned unchanged.
use crate::component::{ComponentBody, ComponentDescriptor};
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

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
    /// Creates a renderer that rejects undefined variables and keeps trailing newlines.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` on syntax errors or undefined variables
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Produces the text of one component.
pub fn render_component(
    renderer: &dyn TemplateRenderer,
    component: &ComponentDescriptor,
) -> Result<String> {
    match &component.body {
        ComponentBody::Template { template, name } => {
            renderer.render(template, &serde_json::json!({ "name": name }))
        }
        ComponentBody::Literal(content) => Ok(content.clone()),
    }
}
