//! Filesystem plumbing shared by the settings store, the metrics sink and the
//! trace exporter.
//!
//! - [`paths`]: where files live
//! - [`file_writer`]: rotating append-only line writer

pub mod file_writer;
pub mod paths;

pub use file_writer::FileWriter;
pub use paths::{expand_tilde, get_data_dir};
