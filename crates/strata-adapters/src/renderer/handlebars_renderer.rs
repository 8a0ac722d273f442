//! Handlebars-backed template renderer.
//!
//! Templates see exactly four fields (`Project`, `Module`, `Context`,
//! `ContextP`) and one helper, `Pascal`. Strict mode turns any other
//! reference into an error instead of an empty string.

use handlebars::{Handlebars, handlebars_helper};
use tracing::{instrument, trace};

use strata_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, pascal_case},
    error::StrataResult,
};

/// Name of the capitalization helper as seen from templates.
pub const PASCAL_HELPER: &str = "Pascal";

handlebars_helper!(pascal: |value: str| pascal_case(value));

/// Renders `.tmpl` sources with Handlebars.
#[derive(Debug)]
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Create a renderer with strict mode on and HTML escaping off.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Generated files are source code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_helper(PASCAL_HELPER, Box::new(pascal));

        Self { handlebars }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip(self, source, context), fields(context = context.context()))]
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> StrataResult<String> {
        trace!(bytes = source.len(), "Rendering template");
        self.handlebars
            .render_template(source, context)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: name.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
