//! Domain layer for the search screen.
//!
//! Plain value types shared by the store, the controller and the collaborator
//! contracts. Nothing in here performs I/O.
//!
//! # Organization
//!
//! - [`engine`]: search engines and the source a query is routed through
//! - [`error`]: error type and result alias for the ambient plumbing
//! - [`input`]: URL-vs-search-terms classification
//! - [`session`]: references to open browsing sessions

pub mod engine;
pub mod error;
pub mod input;
pub mod session;

pub use engine::{SearchEngine, SearchEngineSource};
pub use error::{Result, SearchScreenError};
pub use input::is_url;
pub use session::{Session, SessionId};
