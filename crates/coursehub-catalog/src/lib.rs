//! # coursehub-catalog: Course Catalog Client
//!
//! The only crate in the workspace that talks to the network. It fetches
//! the course list the home screen displays and owns the configuration
//! file.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        coursehub-catalog                                │
//! │                                                                         │
//! │  CourseHubConfig ──► CatalogClient ──► GET /api/courses                │
//! │   (toml + env)            │                                             │
//! │                           ▼                                             │
//! │                   Vec<Course> ──► CatalogSections                       │
//! │                                   (in progress / recommended)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed fetch is returned as [`CatalogError`]; it never touches the
//! cart.

pub mod client;
pub mod config;
pub mod error;
pub mod sections;

pub use client::{CatalogClient, CourseRecord};
pub use config::{CatalogSettings, CourseHubConfig};
pub use error::{CatalogError, CatalogResult};
pub use sections::CatalogSections;
