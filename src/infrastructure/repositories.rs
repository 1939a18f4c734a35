//! Entity repositories built on [`JsonStore`]
//!
//! Each repository adds construction defaults and relationship helpers to a
//! store for one entity kind. Relationship helpers are read-modify-write
//! through [`JsonStore::update_with`] and return `Ok(None)` when the target
//! record does not exist.

use super::config::Config;
use super::store::JsonStore;
use crate::domain::{
    timestamp_now, EntityKind, Game, GameStatus, Player, PlayerRole, Point, PointEvent,
    PointOutcome, PointStatus, PullData, Team,
};
use crate::error::Result;
use serde_json::Value;
use std::ops::Deref;
use std::path::{Path, PathBuf};

macro_rules! store_repository {
    ($name:ident, $record:ty) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            store: JsonStore<$record>,
        }

        impl $name {
            /// Open the repository over `dir`, creating the directory if needed
            pub fn open(dir: PathBuf) -> Result<Self> {
                Ok($name {
                    store: JsonStore::open(dir)?,
                })
            }
        }

        impl Deref for $name {
            type Target = JsonStore<$record>;

            fn deref(&self) -> &Self::Target {
                &self.store
            }
        }
    };
}

store_repository!(TeamRepository, Team);
store_repository!(PlayerRepository, Player);
store_repository!(GameRepository, Game);
store_repository!(PointRepository, Point);

impl TeamRepository {
    pub fn create_team(&self, name: &str, city: &str) -> Result<Team> {
        self.create(Team::new(name, city))
    }

    /// Attach a player id to a team roster. Adding twice is a no-op.
    /// The player record itself is not checked.
    pub fn add_player_to_team(&self, team_id: &str, player_id: &str) -> Result<Option<Team>> {
        self.update_with(team_id, |team| {
            team.add_player(player_id);
        })
    }

    pub fn remove_player_from_team(&self, team_id: &str, player_id: &str) -> Result<Option<Team>> {
        self.update_with(team_id, |team| {
            team.remove_player(player_id);
        })
    }
}

impl PlayerRepository {
    pub fn create_player(&self, name: &str, number: u32, role: PlayerRole) -> Result<Player> {
        self.create(Player::new(name, number, role))
    }

    /// Players listed on a team's roster, in roster order.
    /// Ids that no longer resolve are skipped.
    pub fn find_by_team_id(&self, teams: &TeamRepository, team_id: &str) -> Result<Vec<Player>> {
        let Some(team) = teams.find_by_id(team_id)? else {
            return Ok(Vec::new());
        };

        let mut players = Vec::with_capacity(team.players.len());
        for player_id in &team.players {
            if let Some(player) = self.find_by_id(player_id)? {
                players.push(player);
            }
        }
        Ok(players)
    }
}

impl GameRepository {
    pub fn create_game(&self, team1_id: &str, team2_id: &str) -> Result<Game> {
        self.create(Game::new(team1_id, team2_id))
    }

    /// Append a point outcome and credit one goal: to team 1 when
    /// `scoring_team` matches `team1_id`, otherwise to team 2.
    pub fn add_point(&self, game_id: &str, outcome: PointOutcome) -> Result<Option<Game>> {
        self.update_with(game_id, |game| game.record_outcome(outcome))
    }

    pub fn finish_game(&self, game_id: &str) -> Result<Option<Game>> {
        self.update_with(game_id, |game| game.status = GameStatus::Finished)
    }

    /// Games in which the team plays on either side
    pub fn find_by_team_id(&self, team_id: &str) -> Result<Vec<Game>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|game| game.involves(team_id))
            .collect())
    }
}

impl PointRepository {
    pub fn create_point(
        &self,
        game_id: &str,
        team1_players: Vec<String>,
        team2_players: Vec<String>,
    ) -> Result<Point> {
        self.create(Point::new(game_id, team1_players, team2_players))
    }

    /// Append an event. Its shape is not validated.
    pub fn add_event(&self, point_id: &str, event: PointEvent) -> Result<Option<Point>> {
        self.update_with(point_id, |point| point.events.push(event))
    }

    pub fn record_pull(&self, point_id: &str, pull: PullData) -> Result<Option<Point>> {
        self.update_with(point_id, |point| point.pull = Some(pull))
    }

    pub fn start_point(&self, point_id: &str) -> Result<Option<Point>> {
        self.update_with(point_id, |point| point.start_time = Some(timestamp_now()))
    }

    pub fn finish_point(&self, point_id: &str) -> Result<Option<Point>> {
        self.update_with(point_id, |point| {
            point.status = PointStatus::Finished;
            point.end_time = Some(timestamp_now());
        })
    }

    pub fn find_by_game_id(&self, game_id: &str) -> Result<Vec<Point>> {
        self.find_by_field("game_id", &Value::String(game_id.to_string()))
    }
}

/// All four repositories for one data root
#[derive(Debug, Clone)]
pub struct Repositories {
    pub teams: TeamRepository,
    pub players: PlayerRepository,
    pub games: GameRepository,
    pub points: PointRepository,
}

impl Repositories {
    /// Open every entity directory under `data_root`, named as in `config`
    pub fn open(data_root: &Path, config: &Config) -> Result<Self> {
        let dir = |kind: EntityKind| data_root.join(config.dir_name(kind));
        Ok(Repositories {
            teams: TeamRepository::open(dir(EntityKind::Team))?,
            players: PlayerRepository::open(dir(EntityKind::Player))?,
            games: GameRepository::open(dir(EntityKind::Game))?,
            points: PointRepository::open(dir(EntityKind::Point))?,
        })
    }

    /// Open with default directory names under `data_root`
    pub fn open_at(data_root: &Path) -> Result<Self> {
        Self::open(data_root, &Config::default())
    }
}
