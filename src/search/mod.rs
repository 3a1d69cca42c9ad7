//! The search screen's store, controller and interactor.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! view gesture → SearchInteractor → SearchController ─┬→ SearchStore::dispatch → reduce → subscribers
//!                                                     └→ browser / nav stack / metrics / settings
//! ```
//!
//! # Modules
//!
//! - [`actions`]: state transition requests
//! - [`controller`]: gesture handling and side effects
//! - [`interactor`]: view-facing forwarding layer
//! - [`modes`]: access point and browsing mode tags
//! - [`reducer`]: the pure `(state, action) → state` function
//! - [`state`]: the immutable screen snapshot and its seed
//! - [`store`]: state holder and subscriptions

pub mod actions;
pub mod controller;
pub mod interactor;
pub mod modes;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::SearchAction;
pub use controller::{DefaultSearchController, SearchController};
pub use interactor::{AwesomeBarInteractor, SearchInteractor, ToolbarInteractor};
pub use modes::{BrowsingMode, SearchAccessPoint};
pub use reducer::reduce;
pub use state::{SearchSeed, SearchState};
pub use store::{SearchStore, SubscriptionId};
