use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment};

use crate::component::{Component, Renderable};
use crate::gallery::GALLERY_TEMPLATE;
use crate::model::IMAGE_CONTAINER_TEMPLATE;

const IMAGE_CONTAINER_SOURCE: &str = include_str!("../templates/components/image-container.html");
const GALLERY_SOURCE: &str = include_str!("../templates/pages/gallery.html");

/// Resolves `Renderable`s into HTML. Templates are looked
/// up by name, every value is HTML escaped unless the
/// template marks it `safe`.
pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl TemplateRegistry {
    /// A registry holding the built-in component and page templates
    pub fn new() -> Result<Self> {
        Self::with_templates(&[
            (IMAGE_CONTAINER_TEMPLATE, IMAGE_CONTAINER_SOURCE),
            (GALLERY_TEMPLATE, GALLERY_SOURCE),
        ])
    }

    /// A registry holding exactly `templates`, (name, source)
    pub fn with_templates(templates: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut registry = Self::empty();

        for &(name, source) in templates {
            registry
                .env
                .add_template(name, source)
                .with_context(|| format!("could not parse template {}", name))?;
        }

        Ok(registry)
    }

    pub fn empty() -> Self {
        let mut env = Environment::new();
        // names like "components.image-container" carry no
        // extension, so escaping can't be picked per file type
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        TemplateRegistry { env }
    }

    /// Add a template, replacing any template with the same name
    pub fn add_template(&mut self, name: impl Into<String>, source: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.env
            .add_template_owned(name.clone(), source.into())
            .with_context(|| format!("could not parse template {}", name))
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Look up the template named by `renderable` and fill
    /// it in with its context.
    pub fn resolve(&self, renderable: &Renderable) -> Result<String> {
        let name = renderable.template();
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("could not find template {}", name))?;

        template
            .render(renderable.context())
            .with_context(|| format!("could not render template {}", name))
    }

    pub fn render_component<C: Component + ?Sized>(&self, component: &C) -> Result<String> {
        self.resolve(&component.render())
    }
}
