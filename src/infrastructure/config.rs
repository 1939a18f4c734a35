//! Configuration management

use crate::domain::EntityKind;
use crate::error::{Result, UltistatsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the workspace marker directory
pub const WORKSPACE_DIR: &str = ".ultistats";

const CONFIG_FILE: &str = "config.toml";

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_teams_dir() -> String {
    EntityKind::Team.default_dir_name().to_string()
}

fn default_players_dir() -> String {
    EntityKind::Player.default_dir_name().to_string()
}

fn default_games_dir() -> String {
    EntityKind::Game.default_dir_name().to_string()
}

fn default_points_dir() -> String {
    EntityKind::Point.default_dir_name().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data root; relative paths resolve against the workspace root
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_teams_dir")]
    pub teams_dir: String,
    #[serde(default = "default_players_dir")]
    pub players_dir: String,
    #[serde(default = "default_games_dir")]
    pub games_dir: String,
    #[serde(default = "default_points_dir")]
    pub points_dir: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            teams_dir: default_teams_dir(),
            players_dir: default_players_dir(),
            games_dir: default_games_dir(),
            points_dir: default_points_dir(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from .ultistats/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UltistatsError::NotUltistatsDirectory(path.to_path_buf())
            } else {
                UltistatsError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| UltistatsError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .ultistats/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join(CONFIG_FILE);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| UltistatsError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the data root for a workspace
    pub fn data_root(&self, workspace_root: &Path) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            workspace_root.join(&self.data_dir)
        }
    }

    /// Directory name for one entity kind
    pub fn dir_name(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Team => &self.teams_dir,
            EntityKind::Player => &self.players_dir,
            EntityKind::Game => &self.games_dir,
            EntityKind::Point => &self.points_dir,
        }
    }
}
