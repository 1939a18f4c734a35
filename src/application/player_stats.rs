//! Player statistics use case

use crate::domain::{EntityKind, Player, PlayerStats, Record, StatsTally};
use crate::error::{Result, UltistatsError};
use crate::infrastructure::Repositories;
use std::collections::HashMap;
use tracing::info;

/// One row of the statistics table
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatLine {
    pub player: Player,
    pub team_name: Option<String>,
    pub stats: PlayerStats,
}

/// Rows of the statistics table and how many player records were rewritten
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub lines: Vec<PlayerStatLine>,
    pub saved: usize,
}

/// Service computing player counters from recorded points
pub struct PlayerStatsService {
    repos: Repositories,
}

impl PlayerStatsService {
    pub fn new(repos: Repositories) -> Self {
        PlayerStatsService { repos }
    }

    /// Compute stats for every player, or for one team's roster.
    /// With `save`, players whose stored counters differ are updated.
    pub fn execute(&self, team_id: Option<&str>, save: bool) -> Result<StatsReport> {
        let points = self.repos.points.list_all()?;
        let tally = StatsTally::from_points(&points);

        let teams = self.repos.teams.list_all()?;
        let mut team_of: HashMap<&str, &str> = HashMap::new();
        for team in &teams {
            for player_id in &team.players {
                team_of.entry(player_id.as_str()).or_insert(team.name.as_str());
            }
        }

        let players = match team_id {
            Some(team_id) => {
                if !self.repos.teams.exists(team_id) {
                    return Err(UltistatsError::not_found(EntityKind::Team, team_id));
                }
                self.repos
                    .players
                    .find_by_team_id(&self.repos.teams, team_id)?
            }
            None => self.repos.players.list_all()?,
        };

        let mut lines = Vec::with_capacity(players.len());
        let mut saved = 0;
        for player in players {
            let stats = tally.get(player.id_str());
            let player = if save && player.stats != stats {
                saved += 1;
                self.repos
                    .players
                    .update_with(player.id_str(), |p| p.stats = stats)?
                    .unwrap_or(player)
            } else {
                player
            };
            let team_name = team_of.get(player.id_str()).map(|name| name.to_string());
            lines.push(PlayerStatLine {
                player,
                team_name,
                stats,
            });
        }

        if save {
            info!(players = saved, "saved player stats");
        }
        Ok(StatsReport { lines, saved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DiscEvent, PlayerRole, Point, PointEvent};
    use crate::domain::stats::ASSIST_KEY;
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> (Repositories, String, Vec<String>) {
        let repos = Repositories::open_at(temp.path()).unwrap();
        let team = repos.teams.create_team("Hounds", "Portland").unwrap();
        let mut ids = Vec::new();
        for (name, number) in [("Ann", 7), ("Bo", 8)] {
            let player = repos
                .players
                .create_player(name, number, PlayerRole::Cutter)
                .unwrap();
            repos
                .teams
                .add_player_to_team(team.id_str(), player.id_str())
                .unwrap();
            ids.push(player.id_str().to_string());
        }

        let mut point = Point::new("g1", ids.clone(), vec![]);
        point.events.push(
            PointEvent::new(DiscEvent::Score)
                .player(ids[0].as_str())
                .with(ASSIST_KEY, ids[1].as_str()),
        );
        repos.points.create(point).unwrap();

        (repos, team.id_str().to_string(), ids)
    }

    #[test]
    fn test_stats_computed_without_saving() {
        let temp = TempDir::new().unwrap();
        let (repos, team_id, ids) = setup(&temp);
        let service = PlayerStatsService::new(repos.clone());

        let report = service.execute(Some(&team_id), false).unwrap();
        assert_eq!(report.saved, 0);
        let lines = report.lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].stats.goals, 1);
        assert_eq!(lines[0].stats.points_played, 1);
        assert_eq!(lines[1].stats.assists, 1);
        assert_eq!(lines[0].team_name.as_deref(), Some("Hounds"));

        // Stored counters untouched
        assert_eq!(repos.players.get(&ids[0]).unwrap().stats.goals, 0);
    }

    #[test]
    fn test_save_writes_counters() {
        let temp = TempDir::new().unwrap();
        let (repos, _team_id, ids) = setup(&temp);
        let service = PlayerStatsService::new(repos.clone());

        let report = service.execute(None, true).unwrap();
        assert_eq!(report.saved, 2);
        assert_eq!(service.execute(None, true).unwrap().saved, 0);

        let ann = repos.players.get(&ids[0]).unwrap();
        assert_eq!(ann.stats.goals, 1);
        assert_eq!(ann.stats.games_played, 1);
        assert!(ann.meta.updated_at.is_some());
    }

    #[test]
    fn test_unknown_team() {
        let temp = TempDir::new().unwrap();
        let (repos, _, _) = setup(&temp);
        let service = PlayerStatsService::new(repos);
        assert!(matches!(
            service.execute(Some("ghost"), false),
            Err(UltistatsError::RecordNotFound { .. })
        ));
    }
}
