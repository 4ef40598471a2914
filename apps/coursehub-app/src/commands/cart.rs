//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  select_course  ┌──────────┐  add_selected   ┌────────┐  │
//! │  │  Home    │────────────────►│  Modal   │────────────────►│ In Cart│  │
//! │  │  list    │                 │          │◄────────────────│        │  │
//! │  └──────────┘◄────────────────└──────────┘ remove_selected └────────┘  │
//! │                dismiss_selection                                        │
//! │                                                                         │
//! │  get_cart ──► CartView (cart screen list + badge count)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use coursehub_core::{CartEntry, CartStore, Course};

use crate::error::ApiError;
use crate::state::{HomeState, Navigator, Route};

/// Text shown on the cart screen when there is nothing in it.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// What the cart screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub items: Vec<CartEntry>,
    pub count: usize,
    pub is_empty: bool,
}

impl From<Vec<CartEntry>> for CartView {
    fn from(items: Vec<CartEntry>) -> Self {
        CartView {
            count: items.len(),
            is_empty: items.is_empty(),
            items,
        }
    }
}

/// What the add/remove modal renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub course: Course,
    pub can_add: bool,
    pub can_remove: bool,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartView {
    debug!("get_cart command");
    CartView::from(cart.items())
}

/// Opens the cart screen.
pub fn open_cart(nav: &mut Navigator, cart: &CartStore) -> CartView {
    debug!("open_cart command");
    nav.navigate(Route::AddToCart);
    get_cart(cart)
}

/// Selects a course from the loaded catalog and opens the modal.
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the loaded catalog (or nothing loaded).
pub fn select_course(home: &mut HomeState, course_id: &str) -> Result<SelectionView, ApiError> {
    debug!(course_id = %course_id, "select_course command");

    let course = home
        .sections()
        .and_then(|s| s.find(course_id))
        .cloned()
        .ok_or_else(|| ApiError::not_found("Course", course_id))?;

    let selection = home.selection_mut();
    selection.select(course.clone());

    Ok(SelectionView {
        course,
        can_add: selection.can_add(),
        can_remove: selection.can_remove(),
    })
}

/// "Add to Cart" in the modal.
pub fn add_selected_to_cart(home: &mut HomeState) -> CartView {
    let added = home.selection_mut().confirm_add();
    debug!(course_id = ?added.as_ref().map(|c| &c.id), "add_selected_to_cart command");
    get_cart(home.selection().cart())
}

/// "Remove from Cart" in the modal.
pub fn remove_selected_from_cart(home: &mut HomeState) -> CartView {
    let removed = home.selection_mut().confirm_remove();
    debug!(course_id = ?removed.as_ref().map(|c| &c.id), "remove_selected_from_cart command");
    get_cart(home.selection().cart())
}

/// Closes the modal without changing the cart.
pub fn dismiss_selection(home: &mut HomeState) {
    debug!("dismiss_selection command");
    home.selection_mut().dismiss();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn loaded_home(cart: &CartStore) -> HomeState {
        let mut home = HomeState::new(cart.clone(), None);
        let courses = (0..8)
            .map(|i| Course::new(format!("c{}", i), format!("Course {}", i), "Inst", "https://i"))
            .collect();
        home.finish_loading(Ok(courses), 6);
        home
    }

    #[test]
    fn test_empty_cart_view() {
        let view = get_cart(&CartStore::new());
        assert!(view.is_empty);
        assert_eq!(view.count, 0);
    }

    #[test]
    fn test_select_add_remove_flow() {
        let cart = CartStore::new();
        let mut home = loaded_home(&cart);

        let view = select_course(&mut home, "c7").unwrap();
        assert!(view.can_add);
        assert!(!view.can_remove);

        let cart_view = add_selected_to_cart(&mut home);
        assert_eq!(cart_view.count, 1);
        assert_eq!(cart_view.items[0].id, "c7");
        assert!(home.selection().selected().is_none());

        let view = select_course(&mut home, "c7").unwrap();
        assert!(!view.can_add);
        assert!(view.can_remove);

        let cart_view = remove_selected_from_cart(&mut home);
        assert!(cart_view.is_empty);
    }

    #[test]
    fn test_select_unknown_course() {
        let cart = CartStore::new();
        let mut home = loaded_home(&cart);

        let err = select_course(&mut home, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_select_before_load() {
        let mut home = HomeState::new(CartStore::new(), None);
        assert!(select_course(&mut home, "c1").is_err());
    }

    #[test]
    fn test_dismiss_keeps_cart() {
        let cart = CartStore::new();
        let mut home = loaded_home(&cart);

        select_course(&mut home, "c1").unwrap();
        dismiss_selection(&mut home);

        assert!(home.selection().selected().is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_open_cart_navigates() {
        let cart = CartStore::new();
        let mut nav = Navigator::new();

        let view = open_cart(&mut nav, &cart);
        assert_eq!(nav.current(), &Route::AddToCart);
        assert!(view.is_empty);
    }
}
