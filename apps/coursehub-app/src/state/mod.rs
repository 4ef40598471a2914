//! # State Module
//!
//! Screen state for the app. Like the commands, each piece is a separate
//! type so a command only asks for what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  CartStore   │  │  HomeState   │  │ Login/Signup │  │ Navigator  │  │
//! │  │  (core,      │◄─│  load state  │  │  FormState   │  │ BottomNav  │  │
//! │  │   shared)    │  │  selection   │  │              │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  Only the CartStore is shared; every other state belongs to one screen. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod forms;
mod home;
mod navigation;

pub use forms::{FieldErrors, LoginFormState, SignupFormState};
pub use home::{HomeState, LoadState, GUEST_NAME, LOAD_ERROR_MESSAGE};
pub use navigation::{BottomNav, Navigator, Route, Tab};
