//! daylio-import - Daylio to Exist.io importer
//!
//! Reads a Daylio CSV export, derives moods and activity flags, and
//! optionally pushes them to Exist.io as attribute updates.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ImportError;
