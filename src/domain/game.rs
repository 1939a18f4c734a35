//! Game records and the embedded point outcomes

use super::record::{EntityKind, Record, RecordMeta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Finished,
}

/// Which side of a game a team plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

/// Denormalized summary of a scored point, embedded in `Game.points`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOutcome {
    pub scoring_team: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl PointOutcome {
    pub fn new(scoring_team: impl Into<String>) -> Self {
        PointOutcome {
            scoring_team: scoring_team.into(),
            details: Map::new(),
        }
    }

    /// Attach a caller-defined field
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub team1_id: String,
    pub team2_id: String,
    #[serde(default)]
    pub team1_score: u32,
    #[serde(default)]
    pub team2_score: u32,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub points: Vec<PointOutcome>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Game {
    pub fn new(team1_id: impl Into<String>, team2_id: impl Into<String>) -> Self {
        Game {
            meta: RecordMeta::default(),
            team1_id: team1_id.into(),
            team2_id: team2_id.into(),
            team1_score: 0,
            team2_score: 0,
            status: GameStatus::Active,
            points: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Append an outcome and credit one goal.
    ///
    /// Anything other than `team1_id` is credited to team 2; callers that
    /// need a strict check use [`Game::side_of`] first.
    pub fn record_outcome(&mut self, outcome: PointOutcome) {
        if outcome.scoring_team == self.team1_id {
            self.team1_score += 1;
        } else {
            self.team2_score += 1;
        }
        self.points.push(outcome);
    }

    pub fn side_of(&self, team_id: &str) -> Option<Side> {
        if team_id == self.team1_id {
            Some(Side::Team1)
        } else if team_id == self.team2_id {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.side_of(team_id).is_some()
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }
}

impl Record for Game {
    const KIND: EntityKind = EntityKind::Game;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_outcome_credits_team1() {
        let mut game = Game::new("a", "b");
        game.record_outcome(PointOutcome::new("a"));
        assert_eq!((game.team1_score, game.team2_score), (1, 0));
        assert_eq!(game.points.len(), 1);
    }

    #[test]
    fn test_record_outcome_unknown_team_goes_to_team2() {
        let mut game = Game::new("a", "b");
        game.record_outcome(PointOutcome::new("b"));
        game.record_outcome(PointOutcome::new("zzz"));
        assert_eq!((game.team1_score, game.team2_score), (0, 2));
    }

    #[test]
    fn test_side_of() {
        let game = Game::new("a", "b");
        assert_eq!(game.side_of("a"), Some(Side::Team1));
        assert_eq!(game.side_of("b"), Some(Side::Team2));
        assert_eq!(game.side_of("c"), None);
    }

    #[test]
    fn test_outcome_keeps_caller_fields() {
        let outcome = PointOutcome::new("a").with("point_id", "42");
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, json!({"scoring_team": "a", "point_id": "42"}));
        assert_eq!(outcome.detail_str("point_id"), Some("42"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let game = Game::new("a", "b");
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["status"], json!("active"));
        assert_eq!(value["team1_score"], json!(0));
        assert_eq!(value["points"], json!([]));
    }
}
