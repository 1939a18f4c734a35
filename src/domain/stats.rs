//! Player statistics derived from recorded points

use super::player::PlayerStats;
use super::point::{DiscEvent, Point};
use std::collections::{BTreeMap, BTreeSet};

/// Detail key holding the assisting player on a `score` event
pub const ASSIST_KEY: &str = "assisting_player_id";

/// Running tally of counters keyed by player id
#[derive(Debug, Default)]
pub struct StatsTally {
    stats: BTreeMap<String, PlayerStats>,
    games: BTreeMap<String, BTreeSet<String>>,
}

impl StatsTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a set of points in one pass
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut tally = Self::new();
        for point in points {
            tally.add_point(point);
        }
        tally
    }

    pub fn add_point(&mut self, point: &Point) {
        let line: BTreeSet<&String> = point
            .team1_players
            .iter()
            .chain(point.team2_players.iter())
            .collect();

        for player_id in line {
            self.entry(player_id).points_played += 1;
            let games = self.games.entry(player_id.clone()).or_default();
            if games.insert(point.game_id.clone()) {
                self.entry(player_id).games_played = games.len() as u32;
            }
        }

        for event in &point.events {
            if event.is(DiscEvent::Score) {
                if let Some(scorer) = &event.player_id {
                    self.entry(scorer).goals += 1;
                }
                if let Some(assist) = event.detail_str(ASSIST_KEY) {
                    self.entry(assist).assists += 1;
                }
            } else if event.is(DiscEvent::Defense) {
                if let Some(defender) = &event.player_id {
                    self.entry(defender).blocks += 1;
                }
            }
        }
    }

    fn entry(&mut self, player_id: &str) -> &mut PlayerStats {
        self.stats.entry(player_id.to_string()).or_default()
    }

    /// Counters for one player; zero if the player never appeared
    pub fn get(&self, player_id: &str) -> PlayerStats {
        self.stats.get(player_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
