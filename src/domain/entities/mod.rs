//! Domain entity definitions.

mod cache_key;
mod loaded_image;
mod recipe;
mod recipe_state;

pub use cache_key::{CacheKey, DEFAULT_CACHE_KEY};
pub use loaded_image::{ImageSource, LoadedImage};
pub use recipe::{Difficulty, Recipe, parse_duration_minutes};
pub use recipe_state::RecipeState;
