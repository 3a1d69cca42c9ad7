//! Search preferences: the collaborator contract and its implementations.
//!
//! - [`backend`]: the [`SearchSettings`] trait the controller depends on
//! - [`json`]: JSON file persistence with atomic writes
//! - [`memory`]: non-persistent preferences
//! - [`models`]: the serialized record

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::SearchSettings;
pub use json::JsonSettings;
pub use memory::MemorySettings;
pub use models::SettingsRecord;
