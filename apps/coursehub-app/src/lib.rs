//! # CourseHub App Library
//!
//! Screen state and commands for the CourseHub frontend, plus the startup
//! routine the binary runs.
//!
//! ## Module Organization
//! ```text
//! coursehub_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── home.rs        ◄─── Home screen load + selection
//! │   ├── forms.rs       ◄─── Login / signup fields
//! │   └── navigation.rs  ◄─── Screen stack, bottom tabs
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Load / retry home
//! │   ├── cart.rs     ◄─── Selection and cart
//! │   └── session.rs  ◄─── Login / signup submit
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coursehub_catalog::{CatalogClient, CourseHubConfig};
use coursehub_core::CartStore;

use state::{BottomNav, HomeState, LoadState, Navigator};

/// Everything one app session holds.
///
/// The [`CartStore`] is built once here and handed by handle to each screen
/// that needs it.
#[derive(Debug)]
pub struct App {
    pub config: CourseHubConfig,
    pub cart: CartStore,
    pub catalog: CatalogClient,
    pub navigator: Navigator,
    pub bottom_nav: BottomNav,
}

impl App {
    pub fn new(config: CourseHubConfig) -> Result<Self, error::ApiError> {
        let cart = CartStore::with_config(config.cart);
        let catalog = CatalogClient::new(config.catalog.clone())?;

        Ok(App {
            config,
            cart,
            catalog,
            navigator: Navigator::new(),
            bottom_nav: BottomNav::default(),
        })
    }

    /// A fresh home screen sharing this session's cart.
    pub fn home(&self, email: Option<String>) -> HomeState {
        HomeState::new(self.cart.clone(), email)
    }
}

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • coursehub.toml, then COURSEHUB_* environment                      │
/// │                                                                         │
/// │  3. Initialize State                                                    │
/// │     • One CartStore for the whole session                               │
/// │                                                                         │
/// │  4. Load Home Screen                                                    │
/// │     • GET /api/courses, split into in-progress / recommended            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() {
    init_tracing();

    info!("Starting CourseHub");

    let config = CourseHubConfig::load_or_default(None);
    info!(api = %config.catalog.courses_url(), "Configuration loaded");

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(code = ?e.code, "Failed to start: {}", e);
            return;
        }
    };

    app.cart.subscribe(|items| {
        info!(count = items.len(), "Cart updated");
    });

    let mut home = app.home(None);
    match commands::catalog::load_home(&app.catalog, &mut home).await {
        LoadState::Loaded { sections } => {
            for course in sections.in_progress.iter().chain(sections.recommended.iter()) {
                info!(
                    id = %course.id,
                    name = %course.name,
                    institution = %course.institution,
                    "Course"
                );
            }
        }
        LoadState::Failed { message } => warn!("{}", message),
        LoadState::Loading => {}
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=coursehub=trace` - Show trace for coursehub crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,coursehub=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::{CartConfig, Course};

    #[test]
    fn test_screens_share_one_cart() {
        let app = App::new(CourseHubConfig::default()).unwrap();
        let home = app.home(Some("a@b.co".into()));

        app.cart.add_item(Course::new("a", "A", "Inst", "https://i"));

        assert_eq!(home.cart_badge(), Some(1));
        assert_eq!(commands::cart::get_cart(&app.cart).count, 1);
    }

    #[test]
    fn test_cart_config_applied() {
        let mut config = CourseHubConfig::default();
        config.cart = CartConfig {
            allow_duplicates: false,
        };
        let app = App::new(config).unwrap();

        app.cart.add_item(Course::new("a", "A", "Inst", "https://i"));
        app.cart.add_item(Course::new("a", "A", "Inst", "https://i"));
        assert_eq!(app.cart.len(), 1);
    }
}
