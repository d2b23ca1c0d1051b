//! Recipe data source port definition.

use async_trait::async_trait;

use crate::domain::entities::{Recipe, RecipeState};

/// Port for loading the recipe list.
#[async_trait]
pub trait RecipeDataSource: Send + Sync {
    /// Fetches all recipes.
    /// Returns `Success` or `Error`, never `Loading`.
    async fn fetch_recipes(&self) -> RecipeState<Vec<Recipe>>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Builds a recipe with the given id and image URL.
    pub fn sample_recipe(id: &str, image: &str) -> Recipe {
        Recipe {
            calories: "458 kcal".to_string(),
            carbos: "29 g".to_string(),
            description: "A light fish dish.".to_string(),
            difficulty: 1,
            fats: "6 g".to_string(),
            headline: "with Tomato Concasse and Crispy Potatoes".to_string(),
            id: id.to_string(),
            image: image.to_string(),
            name: "Simple Sumptuous Sea Bream".to_string(),
            proteins: "29 g".to_string(),
            thumb: image.to_string(),
            time: "PT35M".to_string(),
        }
    }

    /// Mock data source returning a fixed state.
    pub struct MockRecipeSource {
        state: RecipeState<Vec<Recipe>>,
        calls: AtomicUsize,
    }

    impl MockRecipeSource {
        /// Creates a source that succeeds with `recipes`.
        pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
            Self {
                state: RecipeState::Success(recipes),
                calls: AtomicUsize::new(0),
            }
        }

        /// Creates a source that fails with `message`.
        pub fn failing(message: &str) -> Self {
            Self {
                state: RecipeState::Error(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of fetches performed.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecipeDataSource for MockRecipeSource {
        async fn fetch_recipes(&self) -> RecipeState<Vec<Recipe>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.state.clone()
        }
    }
}
