//! Template rendering for pyinit.
//! Resolves template ids against the built-in store and substitutes
//! placeholders with MiniJinja.
use crate::error::{Error, Result};
use crate::project::TemplateContext;
use crate::templates;
use log::debug;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template registered under `template_id` with the given context.
    ///
    /// # Arguments
    /// * `template_id` - Id of the template in the store
    /// * `context` - Placeholder values
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template_id: &str, context: &TemplateContext) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that rejects undefined placeholders and keeps the
    /// trailing newline of every template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("escape_quotes", escape_quotes);
        Self { env }
    }
}

/// Escapes a value for use inside a double-quoted string.
///
/// The output is valid in TOML basic strings and in Python string literals.
pub fn escape_quotes(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a built-in template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the store has no such template
    /// * `Error::MissingVariable` if the template uses a placeholder the
    ///   context does not define
    /// * `Error::MinijinjaError` for any other engine failure
    fn render(&self, template_id: &str, context: &TemplateContext) -> Result<String> {
        let (name, source) =
            templates::find_template(template_id).ok_or_else(|| Error::TemplateNotFound {
                template: template_id.to_string(),
            })?;

        let mut env = self.env.clone();
        env.add_template(name, source)?;
        let tmpl = env.get_template(name)?;

        let mut undeclared: Vec<String> = tmpl
            .undeclared_variables(false)
            .into_iter()
            .filter(|name| !context.contains_key(name))
            .collect();
        undeclared.sort();
        if let Some(variable) = undeclared.into_iter().next() {
            return Err(Error::MissingVariable {
                template: template_id.to_string(),
                variable,
            });
        }

        debug!("Rendering template '{template_id}'");
        tmpl.render(context).map_err(|e| match e.kind() {
            ErrorKind::UndefinedError => Error::MissingVariable {
                template: template_id.to_string(),
                variable: e.detail().unwrap_or("unknown").to_string(),
            },
            _ => Error::MinijinjaError(e),
        })
    }
}
