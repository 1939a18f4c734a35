//! Record kinds and the system-managed fields every record carries

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of records, each stored in its own directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    Player,
    Game,
    Point,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Team,
        EntityKind::Player,
        EntityKind::Game,
        EntityKind::Point,
    ];

    /// Default directory name under the data root
    pub fn default_dir_name(&self) -> &'static str {
        match self {
            EntityKind::Team => "teams",
            EntityKind::Player => "players",
            EntityKind::Game => "games",
            EntityKind::Point => "points",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Team => "Team",
            EntityKind::Player => "Player",
            EntityKind::Game => "Game",
            EntityKind::Point => "Point",
        };
        f.write_str(name)
    }
}

/// Fields stamped by the store rather than by callers.
///
/// Flattened into every entity so that the JSON layout stays a single flat
/// object (`{"id": ..., "created_at": ..., "name": ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A typed entity that can live in a [`JsonStore`](crate::infrastructure::JsonStore)
pub trait Record: Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn meta(&self) -> &RecordMeta;

    /// Id assigned by the store, `None` before the record is created
    fn id(&self) -> Option<&str> {
        self.meta().id.as_deref()
    }

    /// Id of a persisted record. Empty for records that were never created.
    fn id_str(&self) -> &str {
        self.id().unwrap_or_default()
    }
}

/// Timestamp format used for `created_at`, `updated_at` and point times.
///
/// Local time without offset, microsecond precision: `2024-03-15T10:20:30.123456`.
pub fn timestamp_now() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
