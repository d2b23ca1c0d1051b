//! Recipe endpoint adapters.

mod client;

pub use client::{DEFAULT_RECIPES_URL, RecipeApiClient};
