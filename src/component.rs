use serde::Serialize;
use std::collections::BTreeMap;

/// Named values handed to a template, keyed by the
/// variable name the template uses
pub type RenderContext = BTreeMap<&'static str, String>;

/// A view component maps its fields to a named template
/// plus a context. It never produces markup itself,
/// that is left to the `TemplateRegistry`.
pub trait Component {
    fn render(&self) -> Renderable;
}

/// Reference to a template together with the values it
/// should be rendered with
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Renderable {
    template: &'static str,
    context: RenderContext,
}

impl Renderable {
    pub fn new(template: &'static str, context: RenderContext) -> Self {
        Renderable { template, context }
    }

    /// The name the template is registered under
    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn into_parts(self) -> (&'static str, RenderContext) {
        (self.template, self.context)
    }
}
