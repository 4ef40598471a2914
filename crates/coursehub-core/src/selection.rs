//! # Course Selection Workflow
//!
//! Tracks the course currently under consideration in the home screen's
//! add/remove modal and applies the chosen action to the cart.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tap course card ──► select(course)                                    │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Modal: "Rust 101"                                             │    │
//! │  │  [Add to Cart]       enabled iff can_add()                     │    │
//! │  │  [Remove from Cart]  enabled iff can_remove()                  │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │         │                     │                    │                    │
//! │   confirm_add()         confirm_remove()       dismiss()               │
//! │         │                     │                    │                    │
//! │         └─────────────────────┴────────────────────┘                    │
//! │                               ▼                                         │
//! │                      selection cleared                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The selection is local to one workflow; only the cart is shared.

use crate::cart::CartStore;
use crate::types::Course;

/// Holds at most one selected course and a handle to the shared cart.
#[derive(Debug, Clone)]
pub struct SelectionWorkflow {
    cart: CartStore,
    selected: Option<Course>,
}

impl SelectionWorkflow {
    pub fn new(cart: CartStore) -> Self {
        SelectionWorkflow {
            cart,
            selected: None,
        }
    }

    /// Makes `course` the current selection, replacing any previous one.
    pub fn select(&mut self, course: Course) {
        self.selected = Some(course);
    }

    /// Clears the selection without touching the cart (modal closed).
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Course> {
        self.selected.as_ref()
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Whether the selected course is already in the cart.
    pub fn is_selected_in_cart(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|course| self.cart.contains(&course.id))
    }

    /// "Add to Cart" is enabled: something is selected and not yet in the cart.
    pub fn can_add(&self) -> bool {
        self.selected.is_some() && !self.is_selected_in_cart()
    }

    /// "Remove from Cart" is enabled: the selected course is in the cart.
    pub fn can_remove(&self) -> bool {
        self.is_selected_in_cart()
    }

    /// Adds the selection to the cart and clears it.
    ///
    /// Returns the course acted on, or `None` if nothing was selected.
    pub fn confirm_add(&mut self) -> Option<Course> {
        let course = self.selected.take()?;
        self.cart.add_item(course.clone());
        Some(course)
    }

    /// Removes every cart entry matching the selection and clears it.
    ///
    /// Returns the course acted on, or `None` if nothing was selected.
    pub fn confirm_remove(&mut self) -> Option<Course> {
        let course = self.selected.take()?;
        self.cart.remove_item(&course.id);
        Some(course)
    }
}
