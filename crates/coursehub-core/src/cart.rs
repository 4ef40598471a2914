//! # Cart Store
//!
//! The single source of truth for which courses the user has marked for
//! purchase. One store is built at startup and its handle is cloned into
//! every screen that needs it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Screen Action            Store Call              Items Change          │
//! │  ─────────────            ──────────              ────────────          │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_item(course) ─────► items.push(course)  │
//! │                                                                         │
//! │  "Remove from Cart" ─────► remove_item(id) ──────► items.retain(≠ id)  │
//! │                                                                         │
//! │  Cart badge / list ──────► items() / len() ──────► (read only)         │
//! │                                                                         │
//! │  After every change: listeners(&post_mutation_snapshot)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Items live behind `Arc<Mutex<_>>` so the handle is `Send + Sync`. The
//! items lock is released before listeners run, so a listener may read the
//! store. A separate dispatch lock is held across each mutation and its
//! notification, so listeners see snapshots in mutation order. A listener
//! must not mutate the store it is subscribed to.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::types::{CartEntry, Course};

// =============================================================================
// Configuration
// =============================================================================

/// Cart behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// When true, adding a course whose id is already in the cart appends a
    /// second entry. When false, the add is ignored.
    pub allow_duplicates: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            allow_duplicates: true,
        }
    }
}

/// What [`CartStore::add_item`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The course was appended.
    Added,

    /// Duplicates are disabled and the id was already present.
    AlreadyInCart,
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&[CartEntry]) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

// =============================================================================
// Cart Store
// =============================================================================

/// Shared, in-memory cart.
///
/// ## Invariants
/// - Items keep insertion order
/// - Lives for the process; never persisted
/// - Cloning the store clones the handle, not the items
#[derive(Clone, Default)]
pub struct CartStore {
    config: CartConfig,
    items: Arc<Mutex<Vec<CartEntry>>>,
    listeners: Arc<Mutex<Listeners>>,
    dispatch: Arc<Mutex<()>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("config", &self.config)
            .field("items", &*self.lock_items())
            .finish()
    }
}

impl CartStore {
    /// Creates an empty cart with default settings.
    pub fn new() -> Self {
        Self::with_config(CartConfig::default())
    }

    pub fn with_config(config: CartConfig) -> Self {
        CartStore {
            config,
            items: Arc::new(Mutex::new(Vec::new())),
            listeners: Arc::new(Mutex::new(Listeners::default())),
            dispatch: Arc::new(Mutex::new(())),
        }
    }

    pub fn config(&self) -> CartConfig {
        self.config
    }

    /// Appends `course` to the cart.
    ///
    /// ## Behavior
    /// - `allow_duplicates = true` (default): always appends, so adding the
    ///   same course twice yields two entries
    /// - `allow_duplicates = false`: ignored when the id is already present
    pub fn add_item(&self, course: Course) -> AddOutcome {
        let _dispatch = self.lock_dispatch();
        let snapshot = {
            let mut items = self.lock_items();
            if !self.config.allow_duplicates && items.iter().any(|i| i.id == course.id) {
                return AddOutcome::AlreadyInCart;
            }
            items.push(course);
            items.clone()
        };

        self.notify(&snapshot);
        AddOutcome::Added
    }

    /// Removes every entry whose id is `course_id`.
    ///
    /// Returns how many entries were removed. Zero means the cart is
    /// unchanged and no listener is called.
    pub fn remove_item(&self, course_id: &str) -> usize {
        let _dispatch = self.lock_dispatch();
        let (removed, snapshot) = {
            let mut items = self.lock_items();
            let before = items.len();
            items.retain(|i| i.id != course_id);
            (before - items.len(), items.clone())
        };

        if removed > 0 {
            self.notify(&snapshot);
        }
        removed
    }

    /// Empties the cart.
    pub fn clear(&self) {
        let _dispatch = self.lock_dispatch();
        let was_empty = {
            let mut items = self.lock_items();
            let was_empty = items.is_empty();
            items.clear();
            was_empty
        };

        if !was_empty {
            self.notify(&[]);
        }
    }

    /// Snapshot of the current contents in insertion order.
    pub fn items(&self) -> Vec<CartEntry> {
        self.lock_items().clone()
    }

    /// Number of entries (the badge count).
    pub fn len(&self) -> usize {
        self.lock_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_items().is_empty()
    }

    /// Whether any entry has this id. Linear scan.
    pub fn contains(&self, course_id: &str) -> bool {
        self.lock_items().iter().any(|i| i.id == course_id)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a listener called with the post-mutation items after every
    /// change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[CartEntry]) + Send + Sync + 'static,
    {
        let mut listeners = self.lock_listeners();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Drops a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.entries.len();
        listeners.entries.retain(|(sid, _)| *sid != id);
        listeners.entries.len() != before
    }

    fn notify(&self, snapshot: &[CartEntry]) {
        // Clone the list so a listener can subscribe or unsubscribe.
        let listeners: Vec<Listener> = self
            .lock_listeners()
            .entries
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }

    // No operation leaves the items half-updated, so a poisoned lock is safe
    // to keep using.
    fn lock_items(&self) -> MutexGuard<'_, Vec<CartEntry>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Taken before the items lock and held through notify.
    fn lock_dispatch(&self) -> MutexGuard<'_, ()> {
        self.dispatch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
