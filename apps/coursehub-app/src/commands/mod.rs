//! # Commands Module
//!
//! Everything the frontend calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Home screen load / retry
//! ├── cart.rs     ◄─── Course selection and cart
//! └── session.rs  ◄─── Login / signup submit
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore) -> CartView
//!
//! // Needs the home screen (which holds a cart handle)
//! fn select_course(home: &mut HomeState, course_id: &str) -> Result<SelectionView, ApiError>
//!
//! // Needs the network
//! async fn load_home(client: &CatalogClient, home: &mut HomeState) -> LoadState
//! ```

pub mod cart;
pub mod catalog;
pub mod session;
