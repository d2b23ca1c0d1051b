//! Domain error types.

mod image_error;
mod recipe_error;

pub use image_error::{ImageError, ImageResult};
pub use recipe_error::RecipeError;
