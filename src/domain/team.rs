//! Team records

use super::record::{EntityKind, Record, RecordMeta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    #[serde(default)]
    pub city: String,
    /// Player ids in roster order
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Team {
            meta: RecordMeta::default(),
            name: name.into(),
            city: city.into(),
            players: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Append a player id unless it is already on the roster.
    /// Returns whether the roster changed.
    pub fn add_player(&mut self, player_id: &str) -> bool {
        if self.has_player(player_id) {
            return false;
        }
        self.players.push(player_id.to_string());
        true
    }

    /// Remove every occurrence of a player id. Returns whether the roster changed.
    pub fn remove_player(&mut self, player_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p != player_id);
        self.players.len() != before
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p == player_id)
    }
}

impl Record for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}
