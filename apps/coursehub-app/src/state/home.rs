//! # Home Screen State
//!
//! ## Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐   fetch ok    ┌──────────────────────────────┐          │
//! │   │ Loading  │──────────────►│ Loaded { in_progress,        │          │
//! │   └──────────┘               │          recommended }       │          │
//! │        │  ▲                  └──────────────────────────────┘          │
//! │  fetch │  │ retry()                                                     │
//! │  error ▼  │                                                             │
//! │   ┌──────────────────────────────────────────────┐                     │
//! │   │ Failed { "Failed to load courses. Please     │                     │
//! │   │          try again." }                       │                     │
//! │   └──────────────────────────────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fetch result only ever changes `load`. The cart is touched solely
//! through the selection workflow.

use serde::Serialize;
use tracing::{error, info};

use coursehub_catalog::{CatalogError, CatalogSections};
use coursehub_core::{CartStore, Course, SelectionWorkflow};

/// Text shown in place of the course lists when the fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load courses. Please try again.";

/// Shown in the header when nobody logged in.
pub const GUEST_NAME: &str = "Guest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LoadState {
    Loading,
    Loaded { sections: CatalogSections },
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub struct HomeState {
    email: Option<String>,
    load: LoadState,
    selection: SelectionWorkflow,
}

impl HomeState {
    /// A home screen in the `Loading` state, sharing `cart`.
    pub fn new(cart: CartStore, email: Option<String>) -> Self {
        HomeState {
            email,
            load: LoadState::Loading,
            selection: SelectionWorkflow::new(cart),
        }
    }

    /// Name shown under "Welcome!".
    pub fn greeting_name(&self) -> &str {
        self.email.as_deref().unwrap_or(GUEST_NAME)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn sections(&self) -> Option<&CatalogSections> {
        match &self.load {
            LoadState::Loaded { sections } => Some(sections),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Applies the outcome of a catalog fetch.
    pub fn finish_loading(
        &mut self,
        result: Result<Vec<Course>, CatalogError>,
        in_progress_count: usize,
    ) {
        self.load = match result {
            Ok(courses) => {
                let sections = CatalogSections::split(courses, in_progress_count);
                info!(
                    in_progress = sections.in_progress.len(),
                    recommended = sections.recommended.len(),
                    "Catalog loaded"
                );
                LoadState::Loaded { sections }
            }
            Err(err) => {
                error!("Error fetching courses: {}", err);
                LoadState::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }
            }
        };
    }

    /// Back to `Loading` before a new fetch.
    pub fn retry(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Badge count on the cart icon; `None` hides the badge.
    pub fn cart_badge(&self) -> Option<usize> {
        match self.selection.cart().len() {
            0 => None,
            n => Some(n),
        }
    }

    pub fn selection(&self) -> &SelectionWorkflow {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionWorkflow {
        &mut self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(n: usize) -> Vec<Course> {
        (0..n)
            .map(|i| Course::new(format!("id{}", i), format!("C{}", i), "Inst", "https://i"))
            .collect()
    }

    #[test]
    fn test_starts_loading_as_guest() {
        let home = HomeState::new(CartStore::new(), None);
        assert!(home.is_loading());
        assert_eq!(home.greeting_name(), "Guest");
        assert_eq!(home.cart_badge(), None);
    }

    #[test]
    fn test_greets_by_email() {
        let home = HomeState::new(CartStore::new(), Some("a@b.co".into()));
        assert_eq!(home.greeting_name(), "a@b.co");
    }

    #[test]
    fn test_finish_loading_splits_sections() {
        let mut home = HomeState::new(CartStore::new(), None);
        home.finish_loading(Ok(courses(9)), 6);

        let sections = home.sections().unwrap();
        assert_eq!(sections.in_progress.len(), 6);
        assert_eq!(sections.recommended.len(), 3);
        assert!(home.error_message().is_none());
    }

    #[test]
    fn test_failed_fetch_leaves_cart_alone() {
        let cart = CartStore::new();
        cart.add_item(Course::new("x", "X", "Inst", "https://i"));
        let mut home = HomeState::new(cart.clone(), None);

        home.finish_loading(Err(CatalogError::InvalidConfig("boom".into())), 6);

        assert_eq!(home.error_message(), Some(LOAD_ERROR_MESSAGE));
        assert!(home.sections().is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(home.cart_badge(), Some(1));

        home.retry();
        assert!(home.is_loading());
    }

    #[test]
    fn test_badge_tracks_shared_cart() {
        let cart = CartStore::new();
        let home = HomeState::new(cart.clone(), None);

        cart.add_item(Course::new("a", "A", "Inst", "https://i"));
        cart.add_item(Course::new("a", "A", "Inst", "https://i"));
        assert_eq!(home.cart_badge(), Some(2));
    }
}
