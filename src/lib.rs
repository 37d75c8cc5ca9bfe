//! Image result cards for the crawler's image database.
//!
//! An [`ImageContainer`](model::ImageContainer) holds the five values a card
//! shows and renders into a [`Renderable`](component::Renderable): a template
//! name plus its context. The [`TemplateRegistry`](template::TemplateRegistry)
//! turns renderables into HTML, and [`gallery`] puts whole result pages
//! together.

pub mod component;
pub mod gallery;
pub mod model;
pub mod template;
