use crate::component::{Component, RenderContext, Renderable};

/// Template every image container renders through
pub const IMAGE_CONTAINER_TEMPLATE: &str = "components.image-container";

/// A single image result card: the image, its link back to
/// the page it was found on, and some text around it.
///
/// All fields are fixed at construction. Nothing is validated
/// or normalised, empty strings are kept as they are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageContainer {
    /// the image source
    url: String,
    /// the alternative text for the image
    alt: String,
    /// tooltip / caption title
    title: String,
    /// the page this image links to
    page_url: String,
    /// text shown under the image
    text: String,
}

impl ImageContainer {
    pub fn new(
        url: impl Into<String>,
        alt: impl Into<String>,
        title: impl Into<String>,
        page: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        ImageContainer {
            url: url.into(),
            alt: alt.into(),
            title: title.into(),
            page_url: page.into(),
            text: text.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for ImageContainer {
    fn render(&self) -> Renderable {
        // templates read `page_url`, not `page`
        let context = RenderContext::from([
            ("url", self.url.clone()),
            ("alt", self.alt.clone()),
            ("title", self.title.clone()),
            ("page_url", self.page_url.clone()),
            ("text", self.text.clone()),
        ]);

        Renderable::new(IMAGE_CONTAINER_TEMPLATE, context)
    }
}
