//! Config management use case

use crate::error::{Result, UltistatsError};
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::path::PathBuf;

const VALID_KEYS: &str = "data_dir, teams_dir, players_dir, games_dir, points_dir";

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "data_dir" => Ok(config.data_dir.display().to_string()),
            "teams_dir" => Ok(config.teams_dir),
            "players_dir" => Ok(config.players_dir),
            "games_dir" => Ok(config.games_dir),
            "points_dir" => Ok(config.points_dir),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(UltistatsError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value. Existing records are not moved.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "data_dir" => {
                if value.trim().is_empty() {
                    return Err(UltistatsError::Config(
                        "data_dir cannot be empty".to_string(),
                    ));
                }
                config.data_dir = PathBuf::from(value);
            }
            "teams_dir" => config.teams_dir = Self::dir_name(key, value)?,
            "players_dir" => config.players_dir = Self::dir_name(key, value)?,
            "games_dir" => config.games_dir = Self::dir_name(key, value)?,
            "points_dir" => config.points_dir = Self::dir_name(key, value)?,
            "created" => {
                return Err(UltistatsError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(UltistatsError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }

    /// Entity directory names are single path components
    fn dir_name(key: &str, value: &str) -> Result<String> {
        let value = value.trim();
        if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
            return Err(UltistatsError::Config(format!(
                "Invalid value for {}: '{}'. Use a plain directory name",
                key, value
            )));
        }
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(init(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("data_dir").unwrap(), "data");
        assert_eq!(service.get("points_dir").unwrap(), "points");
        assert!(service.get("created").is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("games_dir", "matches").unwrap();
        assert_eq!(service.get("games_dir").unwrap(), "matches");
        assert_eq!(service.list().unwrap().games_dir, "matches");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("teams_dir", "../teams").is_err());
        assert!(service.set("teams_dir", "").is_err());
        assert!(service.set("created", "2025-01-01").is_err());
        assert!(service.set("colour", "blue").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        match service.get("mode").unwrap_err() {
            UltistatsError::Config(msg) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
