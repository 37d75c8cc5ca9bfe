use serde::{Deserialize, Serialize};

use super::ImageContainer;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// the link for this image
    pub link: String,
    /// the alternative text found within the image
    pub alt: String,
    /// the page the image was found on
    #[serde(default)]
    pub page_url: String,
    /// the file name of the image, if known
    #[serde(default)]
    pub filename: String,
}

impl Image {
    /// The stored filename, or the last path segment of
    /// the image link when none was stored.
    pub fn filename_or_link_tail(&self) -> &str {
        if !self.filename.is_empty() {
            return &self.filename;
        }

        let path = self.link.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').next().unwrap_or_default()
    }

    /// SVG files, icons and images without a link are
    /// never shown as results
    pub fn is_indexable(&self) -> bool {
        if self.link.is_empty() {
            return false;
        }

        let is_svg = self
            .filename_or_link_tail()
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("svg"));

        !is_svg && !self.link.contains("icons")
    }

    /// Splits the filename (minus the extension) into
    /// lowercase words. E.g. "Big_Red-cat.2.png" -> ["big", "red", "cat", "2"]
    pub fn title_words(&self) -> Vec<String> {
        let name = self.filename_or_link_tail();
        let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);

        stem.split(['-', '_', '.', ' '])
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

impl From<&Image> for ImageContainer {
    fn from(image: &Image) -> Self {
        let words = image.title_words();
        let title = if words.is_empty() {
            image.filename_or_link_tail().to_string()
        } else {
            words.join(" ")
        };

        ImageContainer::new(
            image.link.as_str(),
            image.alt.as_str(),
            title,
            image.page_url.as_str(),
            image.alt.as_str(),
        )
    }
}
