//! Point records: lines, pull and the course of the point

use super::record::{EntityKind, Record, RecordMeta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Players per side on the field
pub const LINE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointStatus {
    #[default]
    Active,
    Finished,
}

/// Events that can occur during a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscEvent {
    Pass,
    Defense,
    Drop,
    Turnover,
    Timeout,
    Score,
    Injury,
    Call,
}

impl DiscEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscEvent::Pass => "pass",
            DiscEvent::Defense => "defense",
            DiscEvent::Drop => "drop",
            DiscEvent::Turnover => "turnover",
            DiscEvent::Timeout => "timeout",
            DiscEvent::Score => "score",
            DiscEvent::Injury => "injury",
            DiscEvent::Call => "call",
        }
    }
}

impl fmt::Display for DiscEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" => Ok(DiscEvent::Pass),
            "defense" | "block" => Ok(DiscEvent::Defense),
            "drop" => Ok(DiscEvent::Drop),
            "turnover" => Ok(DiscEvent::Turnover),
            "timeout" => Ok(DiscEvent::Timeout),
            "score" => Ok(DiscEvent::Score),
            "injury" => Ok(DiscEvent::Injury),
            "call" => Ok(DiscEvent::Call),
            _ => Err(format!(
                "Invalid event: '{}'. Valid events are: pass, defense, drop, turnover, \
                timeout, score, injury, call",
                s
            )),
        }
    }
}

/// One entry in `Point.events`. The store does not validate its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointEvent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl PointEvent {
    pub fn new(kind: DiscEvent) -> Self {
        PointEvent {
            kind: Some(kind.as_str().to_string()),
            ..Default::default()
        }
    }

    pub fn player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    pub fn team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn is(&self, kind: DiscEvent) -> bool {
        self.kind.as_deref() == Some(kind.as_str())
    }

    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullLocation {
    InBounds,
    OutOfBounds,
}

impl FromStr for PullLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "in_bounds" | "in" => Ok(PullLocation::InBounds),
            "out_of_bounds" | "out" => Ok(PullLocation::OutOfBounds),
            _ => Err(format!(
                "Invalid pull location: '{}'. Valid locations are: in_bounds, out_of_bounds",
                s
            )),
        }
    }
}

/// How an in-bounds pull was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullReception {
    Catch,
    Lift,
}

impl FromStr for PullReception {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "catch" => Ok(PullReception::Catch),
            "lift" => Ok(PullReception::Lift),
            _ => Err(format!(
                "Invalid pull reception: '{}'. Valid values are: catch, lift",
                s
            )),
        }
    }
}

/// The pull that starts a point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullData {
    pub pulling_player: String,
    pub pulling_team: String,
    pub pull_location: PullLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_or_lift: Option<PullReception>,
    #[serde(default)]
    pub brick_called: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_player: Option<String>,
    pub receiving_team: String,
}

impl PullData {
    /// Check that the pull fields fit together: in-bounds pulls say how they
    /// were received, a brick only applies to out-of-bounds pulls, and the
    /// pulling and receiving teams differ.
    pub fn validate(&self) -> Result<(), String> {
        if self.pulling_team == self.receiving_team {
            return Err("pulling and receiving team must differ".to_string());
        }
        match self.pull_location {
            PullLocation::InBounds => {
                if self.catch_or_lift.is_none() {
                    return Err("in-bounds pull needs catch or lift".to_string());
                }
                if self.brick_called {
                    return Err("brick can only be called on an out-of-bounds pull".to_string());
                }
            }
            PullLocation::OutOfBounds => {
                if self.catch_or_lift.is_some() {
                    return Err("out-of-bounds pull cannot be caught or lifted".to_string());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub game_id: String,
    #[serde(default)]
    pub team1_players: Vec<String>,
    #[serde(default)]
    pub team2_players: Vec<String>,
    #[serde(default)]
    pub events: Vec<PointEvent>,
    #[serde(default)]
    pub status: PointStatus,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull: Option<PullData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Point {
    pub fn new(
        game_id: impl Into<String>,
        team1_players: Vec<String>,
        team2_players: Vec<String>,
    ) -> Self {
        Point {
            meta: RecordMeta::default(),
            game_id: game_id.into(),
            team1_players,
            team2_players,
            events: Vec::new(),
            status: PointStatus::Active,
            start_time: None,
            end_time: None,
            pull: None,
            extra: Map::new(),
        }
    }

    pub fn played_by(&self, player_id: &str) -> bool {
        self.team1_players
            .iter()
            .chain(self.team2_players.iter())
            .any(|p| p == player_id)
    }

    pub fn is_active(&self) -> bool {
        self.status == PointStatus::Active
    }
}

impl Record for Point {
    const KIND: EntityKind = EntityKind::Point;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pull() -> PullData {
        PullData {
            pulling_player: "p1".to_string(),
            pulling_team: "a".to_string(),
            pull_location: PullLocation::InBounds,
            catch_or_lift: Some(PullReception::Catch),
            brick_called: false,
            receiving_player: Some("p9".to_string()),
            receiving_team: "b".to_string(),
        }
    }

    #[test]
    fn test_new_point_persists_null_times() {
        let point = Point::new("g1", vec![], vec![]);
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["start_time"], Value::Null);
        assert_eq!(value["end_time"], Value::Null);
        assert_eq!(value["status"], json!("active"));
        assert_eq!(value["events"], json!([]));
        assert!(value.get("pull").is_none());
    }

    #[test]
    fn test_event_shape() {
        let event = PointEvent::new(DiscEvent::Score)
            .player("p1")
            .team("a")
            .with("assisting_player_id", "p2");
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"type": "score", "player_id": "p1", "team_id": "a", "assisting_player_id": "p2"})
        );
        assert!(event.is(DiscEvent::Score));
        assert_eq!(event.detail_str("assisting_player_id"), Some("p2"));
    }

    #[test]
    fn test_event_without_type_still_parses() {
        let event: PointEvent = serde_json::from_value(json!({"note": "wind"})).unwrap();
        assert_eq!(event.kind, None);
        assert_eq!(event.detail_str("note"), Some("wind"));
    }

    #[test]
    fn test_disc_event_from_str() {
        assert_eq!("block".parse::<DiscEvent>(), Ok(DiscEvent::Defense));
        assert_eq!("Turnover".parse::<DiscEvent>(), Ok(DiscEvent::Turnover));
        assert!("huck".parse::<DiscEvent>().is_err());
    }

    #[test]
    fn test_pull_validation() {
        assert!(pull().validate().is_ok());

        let mut no_reception = pull();
        no_reception.catch_or_lift = None;
        assert!(no_reception.validate().is_err());

        let mut brick = pull();
        brick.pull_location = PullLocation::OutOfBounds;
        brick.catch_or_lift = None;
        brick.brick_called = true;
        assert!(brick.validate().is_ok());

        let mut same_team = pull();
        same_team.receiving_team = "a".to_string();
        assert!(same_team.validate().is_err());
    }

    #[test]
    fn test_pull_location_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(PullLocation::OutOfBounds).unwrap(),
            json!("out_of_bounds")
        );
        assert_eq!("out".parse::<PullLocation>(), Ok(PullLocation::OutOfBounds));
    }

    #[test]
    fn test_played_by() {
        let point = Point::new("g", vec!["a".to_string()], vec!["b".to_string()]);
        assert!(point.played_by("a"));
        assert!(point.played_by("b"));
        assert!(!point.played_by("c"));
    }
}
