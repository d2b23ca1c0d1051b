//! Text rendering of the recipe list.

use std::fmt::Write;

use crate::application::dto::ImageLoadedEvent;
use crate::domain::entities::{Recipe, RecipeState};

use super::image_slot::ImageSlot;

/// One recipe card.
#[derive(Debug, Clone)]
pub struct RecipeRow {
    /// The recipe shown.
    pub recipe: Recipe,
    /// Whether the description is visible.
    pub expanded: bool,
    /// Image display state.
    pub image: ImageSlot,
}

impl RecipeRow {
    /// Creates a collapsed row with a pending image.
    #[must_use]
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            expanded: false,
            image: ImageSlot::Loading,
        }
    }

    /// Returns the detail line: time, calories and difficulty.
    #[must_use]
    pub fn details(&self) -> String {
        let minutes = self
            .recipe
            .preparation_minutes()
            .map_or_else(|| "?".to_string(), |m| m.to_string());
        format!(
            "{minutes} min.  {}.  {}",
            self.recipe.calories,
            self.recipe.difficulty_level()
        )
    }

    fn render_into(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", self.recipe.name)?;
        writeln!(out, "  {}", self.recipe.headline)?;
        if self.expanded {
            writeln!(out, "  Description:")?;
            writeln!(out, "  {}", self.recipe.description)?;
        }
        writeln!(out, "  {}", self.details())?;
        writeln!(out, "  image: {}", self.image)
    }
}

#[derive(Debug, Clone, Default)]
enum ListState {
    #[default]
    Loading,
    Error(String),
    Rows(Vec<RecipeRow>),
}

/// View model for the recipe list screen.
///
/// Owns the per-row display state; images are fed in as
/// [`ImageLoadedEvent`]s from the request service.
#[derive(Debug, Clone, Default)]
pub struct RecipeListView {
    state: ListState,
}

impl RecipeListView {
    /// Creates a view in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with `state`. Rows start collapsed with pending images.
    pub fn set_state(&mut self, state: &RecipeState<Vec<Recipe>>) {
        self.state = match state {
            RecipeState::Loading => ListState::Loading,
            RecipeState::Error(message) => ListState::Error(message.clone()),
            RecipeState::Success(recipes) => {
                ListState::Rows(recipes.iter().cloned().map(RecipeRow::new).collect())
            }
        };
    }

    /// Returns the rows, empty unless recipes are loaded.
    #[must_use]
    pub fn rows(&self) -> &[RecipeRow] {
        match &self.state {
            ListState::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Image URLs of all rows, in display order.
    #[must_use]
    pub fn image_urls(&self) -> Vec<String> {
        self.rows().iter().map(|row| row.recipe.image.clone()).collect()
    }

    /// Flips the expanded flag of the recipe with `id`.
    /// Returns false if no such row exists.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let ListState::Rows(rows) = &mut self.state
            && let Some(row) = rows.iter_mut().find(|row| row.recipe.id == id)
        {
            row.expanded = !row.expanded;
            return true;
        }
        false
    }

    /// Sets the expanded flag on every row.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        if let ListState::Rows(rows) = &mut self.state {
            for row in rows {
                row.expanded = expanded;
            }
        }
    }

    /// Applies a finished image request to every row showing that URL.
    /// Returns the number of rows updated.
    pub fn apply(&mut self, event: &ImageLoadedEvent) -> usize {
        let ListState::Rows(rows) = &mut self.state else {
            return 0;
        };
        let slot = ImageSlot::from_result(event.result.as_ref());
        let mut updated = 0;
        for row in rows.iter_mut().filter(|row| row.recipe.image == event.url) {
            row.image = slot;
            updated += 1;
        }
        updated
    }

    /// Renders the whole screen as text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Recipes\n\n");
        let result = match &self.state {
            ListState::Loading => writeln!(out, "Loading recipes..."),
            ListState::Error(message) => writeln!(out, "{message}"),
            ListState::Rows(rows) => rows.iter().try_for_each(|row| {
                row.render_into(&mut out)?;
                writeln!(out)
            }),
        };
        debug_assert!(result.is_ok(), "writing to a String cannot fail");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::entities::{CacheKey, ImageSource, LoadedImage};
    use crate::domain::ports::mocks::{sample_image, sample_recipe};

    fn loaded_view() -> RecipeListView {
        let mut view = RecipeListView::new();
        view.set_state(&RecipeState::Success(vec![
            sample_recipe("a", "https://host/a.jpg"),
            sample_recipe("b", "https://host/b.jpg"),
        ]));
        view
    }

    #[test]
    fn test_loading_and_error_screens() {
        let mut view = RecipeListView::new();
        assert!(view.render().contains("Loading recipes..."));

        view.set_state(&RecipeState::Error("JSON parsing error: eof".to_string()));
        assert!(view.render().contains("JSON parsing error: eof"));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_rows_render_details() {
        let view = loaded_view();
        let text = view.render();

        assert!(text.contains("Simple Sumptuous Sea Bream"));
        assert!(text.contains("35 min.  458 kcal.  Medium"));
        assert!(text.contains("image: loading..."));
        assert!(!text.contains("Description:"));
    }

    #[test]
    fn test_toggle_shows_description() {
        let mut view = loaded_view();

        assert!(view.toggle("b"));
        assert!(!view.rows()[0].expanded);
        assert!(view.rows()[1].expanded);
        assert!(view.render().contains("Description:\n  A light fish dish."));

        assert!(!view.toggle("missing"));
    }

    #[test]
    fn test_unparsable_time_shows_placeholder() {
        let mut recipe = sample_recipe("a", "https://host/a.jpg");
        recipe.time = "35 minutes".to_string();
        let row = RecipeRow::new(recipe);

        assert!(row.details().starts_with("? min."));
    }

    #[test]
    fn test_apply_image_events() {
        let mut view = loaded_view();
        let loaded = LoadedImage {
            key: CacheKey::new("a.jpg"),
            image: Arc::new(sample_image(4, 3)),
            source: ImageSource::DiskCache,
        };

        let updated = view.apply(&ImageLoadedEvent {
            url: "https://host/a.jpg".to_string(),
            result: Some(loaded),
        });
        view.apply(&ImageLoadedEvent {
            url: "https://host/b.jpg".to_string(),
            result: None,
        });

        assert_eq!(updated, 1);
        assert!(view.rows()[0].image.is_ready());
        assert_eq!(view.rows()[1].image, ImageSlot::Absent);
        let text = view.render();
        assert!(text.contains("image: 4x3 (disk)"));
        assert!(text.contains("image: unavailable"));
    }

    #[test]
    fn test_image_urls_in_order() {
        let view = loaded_view();

        assert_eq!(view.image_urls(), ["https://host/a.jpg", "https://host/b.jpg"]);
    }
}
