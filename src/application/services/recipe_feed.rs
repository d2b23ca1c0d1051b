//! Observable recipe list state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::entities::{Recipe, RecipeState};
use crate::domain::ports::RecipeDataSource;

/// Holds the recipe list state and publishes every change.
///
/// Starts in `Loading`; each refresh replaces the state with the data
/// source's result.
#[derive(Clone)]
pub struct RecipeFeed {
    source: Arc<dyn RecipeDataSource>,
    state_tx: Arc<watch::Sender<RecipeState<Vec<Recipe>>>>,
}

impl RecipeFeed {
    /// Creates a feed in the `Loading` state.
    #[must_use]
    pub fn new(source: Arc<dyn RecipeDataSource>) -> Self {
        let (state_tx, _) = watch::channel(RecipeState::Loading);
        Self {
            source,
            state_tx: Arc::new(state_tx),
        }
    }

    /// Returns a receiver that observes state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RecipeState<Vec<Recipe>>> {
        self.state_tx.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn current(&self) -> RecipeState<Vec<Recipe>> {
        self.state_tx.borrow().clone()
    }

    /// Fetches recipes and publishes the result.
    pub async fn refresh(&self) -> RecipeState<Vec<Recipe>> {
        debug!("Refreshing recipes");
        let state = self.source.fetch_recipes().await;

        match &state {
            RecipeState::Success(recipes) => info!(count = recipes.len(), "Recipes loaded"),
            RecipeState::Error(message) => warn!(error = %message, "Recipes unavailable"),
            RecipeState::Loading => {}
        }

        self.state_tx.send_replace(state.clone());
        state
    }

    /// Runs [`refresh`](Self::refresh) on a background task.
    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        let feed = self.clone();
        tokio::spawn(async move {
            feed.refresh().await;
        })
    }
}
