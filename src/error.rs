//! Error types for daylio-import

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the importer
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Cannot read file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date '{value}' on line {line}: {source}")]
    Parse {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ImportError::File { .. } => 2,
            ImportError::Parse { .. } | ImportError::MissingColumn(_) | ImportError::Csv(_) => 3,
            ImportError::Config(_) => 4,
            ImportError::Http(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ImportError::File { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the path to the Daylio export (e.g., daylio_export.csv)\n\
                    • Export a fresh CSV from Daylio: More > Export Entries > CSV",
                    self
                )
            }
            ImportError::Parse { .. } => {
                format!(
                    "{}\n\n\
                    The full_date column must hold ISO dates: YYYY-MM-DD (e.g., 2024-03-17)",
                    self
                )
            }
            ImportError::MissingColumn(column) => {
                format!(
                    "CSV export has no '{}' column\n\n\
                    Expected header columns: full_date, mood, activities, note",
                    column
                )
            }
            ImportError::Config(msg) => {
                if msg.contains("secrets") {
                    format!(
                        "{}\n\n\
                        Expected secrets file format:\n\
                        {{ \"developerAccessToken\": \"<token>\" }}\n\
                        Use --secrets <PATH> to point at a different file",
                        msg
                    )
                } else if msg.contains("config") {
                    format!(
                        "{}\n\n\
                        Expected config file format:\n\
                        {{ \"filter_activities\": [\"activity to skip\"] }}\n\
                        Use --config <PATH> to point at a different file",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            ImportError::Http(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check your network connection\n\
                    • Re-run with --dry-run to preview without contacting Exist\n\
                    • EXIST_API_URL overrides the API base URL",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ImportError
pub type Result<T> = std::result::Result<T, ImportError>;
