//! # Navigation State
//!
//! The screen stack and the bottom tab bar.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Screen Flow                                    │
//! │                                                                         │
//! │   Welcome ──► Login ──(valid form)──► Home { email } ──► AddToCart      │
//! │      │          ▲                                                       │
//! │      ▼          │                                                       │
//! │    SignUp ──(valid form)                                                │
//! │                                                                         │
//! │   Bottom bar:  [Home] [Explore] [Certificate] [Profile]                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

/// A screen on the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum Route {
    Welcome,
    Login,
    SignUp,
    /// Home carries the email typed at login, if any.
    Home { email: Option<String> },
    AddToCart,
}

static INITIAL_ROUTE: Route = Route::Welcome;

/// Back-stack navigator. Never empty; starts on [`Route::Welcome`].
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            stack: vec![INITIAL_ROUTE.clone()],
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&INITIAL_ROUTE)
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(?route, "navigate");
        self.stack.push(route);
    }

    /// Pops the current screen. Returns false on the initial screen.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Bottom tab bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Tab {
    #[default]
    Home,
    Explore,
    Certificate,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Explore, Tab::Certificate, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
            Tab::Certificate => "Certificate",
            Tab::Profile => "Profile",
        }
    }
}

/// Which tab is highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BottomNav {
    selected: Tab,
}

impl BottomNav {
    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn select(&mut self, tab: Tab) {
        self.selected = tab;
    }
}
