use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use url::Url;

use crate::component::{Component, RenderContext, Renderable};
use crate::model::{Image, ImageContainer};
use crate::template::TemplateRegistry;

/// Template the full results page renders through
pub const GALLERY_TEMPLATE: &str = "pages.gallery";

/// The image database written by the crawler,
/// (image name, image info)
pub type ImageDatabase = BTreeMap<String, Image>;

pub async fn load_database(path: &Path) -> Result<ImageDatabase> {
    let json = fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read image database {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("could not parse image database {}", path.display()))
}

/// This will turn relative urls into
/// full urls.
/// E.g. absolute_url("/services/", "https://google.com/") -> "https://google.com/services/"
fn absolute_url(path: &str, root_url: &Url) -> Result<Url> {
    if let Ok(url) = Url::parse(path) {
        return Ok(url);
    }

    root_url
        .join(path)
        .with_context(|| format!("could not join {} onto {}", path, root_url))
}

/// Resolves `link` in place. Empty links are left empty,
/// joining "" would give back `base` itself
fn resolve_in_place(link: &mut String, base: &Url) {
    if link.is_empty() {
        return;
    }

    match absolute_url(link, base) {
        Ok(url) => *link = url.to_string(),
        Err(e) => log::error!("{:#}", e),
    }
}

/// Makes every image link and page link absolute, using
/// `base` as the root for relative ones
pub fn resolve_links(database: &mut ImageDatabase, base: &Url) {
    for image in database.values_mut() {
        resolve_in_place(&mut image.link, base);
        resolve_in_place(&mut image.page_url, base);
    }
}

/// One container for each indexable image, at most `max_images`
pub fn build_containers(database: &ImageDatabase, max_images: usize) -> Vec<ImageContainer> {
    database
        .iter()
        .filter(|(name, image)| {
            let keep = image.is_indexable();
            if !keep {
                log::debug!("skipping {} ({})", name, image.link);
            }
            keep
        })
        .map(|(_, image)| ImageContainer::from(image))
        .take(max_images)
        .collect()
}

/// A full results page around already rendered cards
pub struct GalleryPage {
    title: String,
    cards: Vec<String>,
}

impl GalleryPage {
    pub fn new(title: impl Into<String>, cards: Vec<String>) -> Self {
        GalleryPage {
            title: title.into(),
            cards,
        }
    }
}

impl Component for GalleryPage {
    fn render(&self) -> Renderable {
        let context = RenderContext::from([
            ("title", self.title.clone()),
            ("cards", self.cards.join("\n")),
        ]);

        Renderable::new(GALLERY_TEMPLATE, context)
    }
}

pub fn render_gallery(
    registry: &TemplateRegistry,
    title: &str,
    containers: &[ImageContainer],
) -> Result<String> {
    let cards = containers
        .iter()
        .map(|container| registry.render_component(container))
        .collect::<Result<Vec<_>>>()?;

    registry.render_component(&GalleryPage::new(title, cards))
}

pub async fn write_gallery(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)
        .await
        .with_context(|| format!("could not write gallery to {}", path.display()))
}
