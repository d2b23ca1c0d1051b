//! Presentation layer: display state and text rendering.

/// Image display state.
pub mod image_slot;
/// Recipe list view model.
pub mod recipe_list;

pub use image_slot::ImageSlot;
pub use recipe_list::{RecipeListView, RecipeRow};
