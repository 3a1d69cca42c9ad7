//! Navigation collaborators.
//!
//! Two narrow contracts replace the static navigation helpers a host usually
//! reaches for, so both can be substituted in tests:
//!
//! - [`BrowserNavigation`]: load text in the browser or switch to it
//! - [`NavController`]: move around the host's screen stack

pub mod browser;

pub use browser::{BrowserDirection, BrowserNavigation, LoadRequest};

use serde::{Deserialize, Serialize};

/// Screens the search screen can push onto the host's navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDestination {
    /// The search engine list in settings.
    SearchEngineSettings,
}

/// The host's screen stack.
pub trait NavController {
    /// Pops back to the previous screen.
    fn navigate_up(&self);

    fn navigate(&self, destination: NavDestination);
}
