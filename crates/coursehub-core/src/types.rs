//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │     Course      │  ====  │   CartEntry     │                        │
//! │  │  ─────────────  │        │  (type alias)   │                        │
//! │  │  id             │        └─────────────────┘                        │
//! │  │  name           │                                                    │
//! │  │  institution    │                                                    │
//! │  │  icon (URL)     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Courses arrive from the catalog API and are read-only here. The wire
//! shape (`_id`, `institute`, `image`) is mapped in `coursehub-catalog`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Course
// =============================================================================

/// A catalog item shown on the home screen and held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Course {
    /// Catalog identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Provider name.
    pub institution: String,

    /// Image URL.
    pub icon: String,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        institution: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Course {
            id: id.into(),
            name: name.into(),
            institution: institution.into(),
            icon: icon.into(),
        }
    }
}

/// An entry in the cart. Same shape as the course it was added from.
pub type CartEntry = Course;
