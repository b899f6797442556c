//! Configuration and secrets loading

use crate::error::{ImportError, Result};
use serde::{de::DeserializeOwned, Deserialize};
use std::fs;
use std::path::Path;

/// Import settings read from config.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Activities dropped from every entry during import
    pub filter_activities: Vec<String>,
}

impl Config {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path, "config")
    }
}

/// Credentials for the Exist API, read from secrets.json
#[derive(Clone, Deserialize)]
pub struct Secrets {
    #[serde(rename = "developerAccessToken")]
    pub developer_access_token: String,
}

impl Secrets {
    /// Load secrets from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let secrets: Secrets = read_json(path, "secrets")?;
        if secrets.developer_access_token.trim().is_empty() {
            return Err(ImportError::Config(format!(
                "developerAccessToken is empty in secrets file {}",
                path.display()
            )));
        }
        Ok(secrets)
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("developer_access_token", &"<redacted>")
            .finish()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ImportError::Config(format!(
            "Failed to read {} file {}: {}",
            kind,
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        ImportError::Config(format!(
            "Failed to parse {} file {}: {}",
            kind,
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"filter_activities": ["sleep early", "chores"]}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.filter_activities, vec!["sleep early", "chores"]);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(&temp.path().join("config.json"));

        match result.unwrap_err() {
            ImportError::Config(msg) => assert!(msg.contains("Failed to read config file")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_requires_filter_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"filters": []}"#).unwrap();

        match Config::load(&path).unwrap_err() {
            ImportError::Config(msg) => {
                assert!(msg.contains("Failed to parse config file"));
                assert!(msg.contains("filter_activities"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_secrets() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("secrets.json");
        fs::write(&path, r#"{"developerAccessToken": "abc123"}"#).unwrap();

        let secrets = Secrets::load(&path).unwrap();
        assert_eq!(secrets.developer_access_token, "abc123");
        assert!(!format!("{:?}", secrets).contains("abc123"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("secrets.json");
        fs::write(&path, r#"{"developerAccessToken": "  "}"#).unwrap();

        assert!(matches!(
            Secrets::load(&path).unwrap_err(),
            ImportError::Config(_)
        ));
    }

    #[test]
    fn test_malformed_secrets() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("secrets.json");
        fs::write(&path, "not json").unwrap();

        match Secrets::load(&path).unwrap_err() {
            ImportError::Config(msg) => assert!(msg.contains("secrets")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
