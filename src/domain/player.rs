//! Player records and roles

use super::record::{EntityKind, Record, RecordMeta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Player roles in ultimate frisbee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayerRole {
    Handler,
    Cutter,
    #[default]
    Hybrid,
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerRole::Handler => "Handler",
            PlayerRole::Cutter => "Cutter",
            PlayerRole::Hybrid => "Hybrid",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "handler" => Ok(PlayerRole::Handler),
            "cutter" => Ok(PlayerRole::Cutter),
            "hybrid" => Ok(PlayerRole::Hybrid),
            _ => Err(format!(
                "Invalid role: '{}'. Valid roles are: handler, cutter, hybrid",
                s
            )),
        }
    }
}

/// Per-player counters. Only the stats service writes these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub points_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub blocks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub number: u32,
    #[serde(default)]
    pub role: PlayerRole,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    pub fn new(name: impl Into<String>, number: u32, role: PlayerRole) -> Self {
        Player {
            meta: RecordMeta::default(),
            name: name.into(),
            number,
            role,
            stats: PlayerStats::default(),
            extra: Map::new(),
        }
    }
}

impl Record for Player {
    const KIND: EntityKind = EntityKind::Player;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}
