mod image;
mod image_container;

pub use image::Image;
pub use image_container::{ImageContainer, IMAGE_CONTAINER_TEMPLATE};
