//! Infrastructure layer - Files on disk and the Exist API

pub mod config;
pub mod daylio_csv;
pub mod exist_client;

pub use config::{Config, Secrets};
pub use daylio_csv::{import_daylio_csv, DaylioExport};
pub use exist_client::{ApiResponse, AttributeApi, ExistClient, HttpTransport, Transport};
