//! # coursehub-core: Pure Business Logic for CourseHub
//!
//! This crate holds every piece of non-presentational logic the CourseHub
//! screens call into. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CourseHub Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Frontend                              │   │
//! │  │   Welcome ──► Login/SignUp ──► Home ──► Cart                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    coursehub-app                                │   │
//! │  │    screen state, navigation, commands                           │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐   │
//! │  │  ★ coursehub-core (THIS CRATE) ★│  │   coursehub-catalog       │   │
//! │  │                                 │  │   GET /api/courses        │   │
//! │  │  types  validation  cart        │  └───────────────────────────┘   │
//! │  │  selection                      │                                   │
//! │  │  NO I/O • PURE FUNCTIONS        │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Course and cart entry types
//! - [`validation`] - Email, password and form rules
//! - [`cart`] - The shared cart store
//! - [`selection`] - The select / add / remove workflow
//! - [`error`] - Validation error messages
//!
//! ## Example Usage
//!
//! ```rust
//! use coursehub_core::{CartStore, Course, SelectionWorkflow};
//!
//! let cart = CartStore::new();
//! let mut selection = SelectionWorkflow::new(cart.clone());
//!
//! selection.select(Course::new("c1", "Rust 101", "Ferris U", "https://img/rust.png"));
//! assert!(selection.can_add());
//!
//! selection.confirm_add();
//! assert_eq!(cart.len(), 1);
//! assert!(selection.selected().is_none());
//! ```

pub mod cart;
pub mod error;
pub mod selection;
pub mod types;
pub mod validation;

pub use cart::{AddOutcome, CartConfig, CartStore, SubscriptionId};
pub use error::ValidationError;
pub use selection::SelectionWorkflow;
pub use types::{CartEntry, Course};
pub use validation::{FieldValidation, LoginForm, SignupForm};

/// Minimum password length accepted by [`validation::validate_password`].
pub const PASSWORD_MIN_LEN: usize = 8;

/// Maximum password length accepted by [`validation::validate_password`].
pub const PASSWORD_MAX_LEN: usize = 12;
