//! Recipe endpoint HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::domain::entities::{Recipe, RecipeState};
use crate::domain::errors::RecipeError;
use crate::domain::ports::RecipeDataSource;

/// Default recipe list endpoint.
pub const DEFAULT_RECIPES_URL: &str =
    "https://hf-android-app.s3-eu-west-1.amazonaws.com/android-test/recipes.json";

/// Fetches the recipe list from a JSON endpoint.
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    client: Client,
    api_url: String,
}

impl RecipeApiClient {
    /// Creates a client for `api_url`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>) -> Result<Self, RecipeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RecipeError::unexpected(format!("failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client, api_url))
    }

    /// Creates a client sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Fetches and parses the recipe list.
    ///
    /// # Errors
    /// Returns error on transport failure, a non-200 status or malformed JSON.
    pub async fn try_fetch(&self) -> Result<Vec<Recipe>, RecipeError> {
        debug!(url = %self.api_url, "Fetching recipes");

        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| RecipeError::io(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RecipeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RecipeError::io(e.to_string()))?;

        let recipes: Vec<Recipe> = serde_json::from_slice(&body)?;
        debug!(count = recipes.len(), "Parsed recipes");
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeDataSource for RecipeApiClient {
    async fn fetch_recipes(&self) -> RecipeState<Vec<Recipe>> {
        match self.try_fetch().await {
            Ok(recipes) => RecipeState::Success(recipes),
            Err(e) => {
                warn!(error = %e, "Failed to fetch recipes");
                RecipeState::Error(e.to_string())
            }
        }
    }
}
