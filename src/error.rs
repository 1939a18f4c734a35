//! Error types for ultistats

use crate::domain::EntityKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ultistats
#[derive(Debug, Error)]
pub enum UltistatsError {
    #[error("Not an ultistats directory: {0}")]
    NotUltistatsDirectory(PathBuf),

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: EntityKind, id: String },

    #[error("{kind} already exists: {id}")]
    DuplicateRecord { kind: EntityKind, id: String },

    #[error("Invalid record id: '{0}'")]
    InvalidId(String),

    #[error("Malformed record {path}: {reason}")]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid line: {0}")]
    InvalidLine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl UltistatsError {
    pub(crate) fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        UltistatsError::RecordNotFound {
            kind,
            id: id.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UltistatsError::NotUltistatsDirectory(_) => 2,
            UltistatsError::RecordNotFound { .. } => 3,
            UltistatsError::Validation(_)
            | UltistatsError::InvalidLine(_)
            | UltistatsError::InvalidId(_) => 4,
            UltistatsError::DuplicateRecord { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            UltistatsError::NotUltistatsDirectory(path) => {
                format!(
                    "Not an ultistats directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'ultistats init' in this directory to create a new workspace\n\
                    • Navigate to an existing ultistats directory\n\
                    • Set ULTISTATS_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            UltistatsError::RecordNotFound { kind, id } => {
                let list_cmd = match kind {
                    EntityKind::Team => "ultistats team list".to_string(),
                    EntityKind::Player => "ultistats player list <TEAM_ID>".to_string(),
                    EntityKind::Game => "ultistats game list".to_string(),
                    EntityKind::Point => "ultistats point list <GAME_ID>".to_string(),
                };
                format!(
                    "{} not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the id for typos (ids are case-sensitive)\n\
                    • Use '{}' to see existing records",
                    kind, id, list_cmd
                )
            }
            UltistatsError::InvalidLine(msg) => {
                format!(
                    "Invalid line: {}\n\n\
                    Each line needs exactly 5 distinct players from the team roster.\n\
                    Example: ultistats point start <GAME_ID> --team1 a,b,c,d,e --team2 f,g,h,i,j",
                    msg
                )
            }
            UltistatsError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: ultistats config data_dir stats-data",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using UltistatsError
pub type Result<T> = std::result::Result<T, UltistatsError>;
