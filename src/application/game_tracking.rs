//! Game setup and point-by-point tracking

use crate::domain::{
    timestamp_now, DiscEvent, EntityKind, Game, Point, PointEvent, PointOutcome, PointStatus,
    PullData, Record, Side, Team, LINE_SIZE,
};
use crate::domain::stats::ASSIST_KEY;
use crate::error::{Result, UltistatsError};
use crate::infrastructure::Repositories;
use std::collections::HashSet;
use tracing::info;

/// Players sent out for a point, plus the pull that starts it
#[derive(Debug, Clone, Default)]
pub struct Lineup {
    pub team1_players: Vec<String>,
    pub team2_players: Vec<String>,
    pub pull: Option<PullData>,
}

/// Who scored a point
#[derive(Debug, Clone, Default)]
pub struct Goal {
    pub scoring_team: String,
    pub scorer: Option<String>,
    pub assist: Option<String>,
}

/// Service for running games: starting them, playing points, scoring
pub struct GameTrackingService {
    repos: Repositories,
}

impl GameTrackingService {
    pub fn new(repos: Repositories) -> Self {
        GameTrackingService { repos }
    }

    fn team(&self, team_id: &str) -> Result<Team> {
        self.repos
            .teams
            .find_by_id(team_id)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Team, team_id))
    }

    pub fn game(&self, game_id: &str) -> Result<Game> {
        self.repos
            .games
            .find_by_id(game_id)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Game, game_id))
    }

    pub fn point(&self, point_id: &str) -> Result<Point> {
        self.repos
            .points
            .find_by_id(point_id)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Point, point_id))
    }

    pub fn games(&self) -> Result<Vec<Game>> {
        self.repos.games.list_all()
    }

    /// Points recorded for a game, in id (creation) order
    pub fn points(&self, game_id: &str) -> Result<Vec<Point>> {
        self.game(game_id)?;
        self.repos.points.find_by_game_id(game_id)
    }

    pub fn start_game(&self, team1_id: &str, team2_id: &str) -> Result<Game> {
        if team1_id == team2_id {
            return Err(UltistatsError::Validation(
                "a team cannot play against itself".to_string(),
            ));
        }
        self.team(team1_id)?;
        self.team(team2_id)?;

        let game = self.repos.games.create_game(team1_id, team2_id)?;
        info!(game_id = %game.id_str(), team1 = %team1_id, team2 = %team2_id, "started game");
        Ok(game)
    }

    pub fn finish_game(&self, game_id: &str) -> Result<Game> {
        let game = self
            .repos
            .games
            .finish_game(game_id)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Game, game_id))?;
        info!(
            game_id = %game_id,
            score = %format!("{}-{}", game.team1_score, game.team2_score),
            "finished game"
        );
        Ok(game)
    }

    /// Create a point for an active game with both lines on the field.
    /// The point is stored already started, with its pull if one was given.
    pub fn start_point(&self, game_id: &str, lineup: Lineup) -> Result<Point> {
        let game = self.game(game_id)?;
        if !game.is_active() {
            return Err(UltistatsError::Validation(format!(
                "game {} is already finished",
                game_id
            )));
        }

        let team1 = self.team(&game.team1_id)?;
        let team2 = self.team(&game.team2_id)?;
        Self::validate_line("team1", &team1, &lineup.team1_players)?;
        Self::validate_line("team2", &team2, &lineup.team2_players)?;

        if let Some(pull) = &lineup.pull {
            Self::validate_pull(&game, &lineup, pull)?;
        }

        let mut point = Point::new(game_id, lineup.team1_players, lineup.team2_players);
        point.pull = lineup.pull;
        point.start_time = Some(timestamp_now());

        let point = self.repos.points.create(point)?;
        info!(point_id = %point.id_str(), game_id = %game_id, "started point");
        Ok(point)
    }

    /// Append an event to a point that is still being played.
    /// Goals go through [`score_point`](Self::score_point) so the game is credited.
    pub fn record_event(&self, point_id: &str, event: PointEvent) -> Result<Point> {
        if event.is(DiscEvent::Score) {
            return Err(UltistatsError::Validation(format!(
                "score events close the point; use 'ultistats point score {} <TEAM_ID>'",
                point_id
            )));
        }
        let point = self.point(point_id)?;
        Self::ensure_active(&point)?;

        self.repos
            .points
            .add_event(point_id, event)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Point, point_id))
    }

    /// Close a point with a goal and credit it on the game's scoreboard
    pub fn score_point(&self, point_id: &str, goal: Goal) -> Result<Game> {
        let point = self.point(point_id)?;
        Self::ensure_active(&point)?;
        let game = self.game(&point.game_id)?;

        let line = match game.side_of(&goal.scoring_team) {
            Some(Side::Team1) => &point.team1_players,
            Some(Side::Team2) => &point.team2_players,
            None => {
                return Err(UltistatsError::Validation(format!(
                    "team {} is not playing in game {}",
                    goal.scoring_team,
                    game.id_str()
                )))
            }
        };

        for player_id in goal.scorer.iter().chain(goal.assist.iter()) {
            if !line.contains(player_id) {
                return Err(UltistatsError::Validation(format!(
                    "player {} is not on the scoring line",
                    player_id
                )));
            }
        }
        if goal.scorer.is_some() && goal.scorer == goal.assist {
            return Err(UltistatsError::Validation(
                "a player cannot assist their own goal".to_string(),
            ));
        }

        let mut event = PointEvent::new(DiscEvent::Score).team(goal.scoring_team.as_str());
        let mut outcome =
            PointOutcome::new(goal.scoring_team.as_str()).with("point_id", point_id);
        if let Some(scorer) = &goal.scorer {
            event = event.player(scorer.as_str());
            outcome = outcome.with("scoring_player_id", scorer.as_str());
        }
        if let Some(assist) = &goal.assist {
            event = event.with(ASSIST_KEY, assist.as_str());
            outcome = outcome.with(ASSIST_KEY, assist.as_str());
        }

        self.repos.points.update_with(point_id, |point| {
            point.events.push(event);
            point.status = PointStatus::Finished;
            point.end_time = Some(timestamp_now());
        })?;

        let game = self
            .repos
            .games
            .add_point(&point.game_id, outcome)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Game, &point.game_id))?;

        info!(
            point_id = %point_id,
            game_id = %game.id_str(),
            scoring_team = %goal.scoring_team,
            score = %format!("{}-{}", game.team1_score, game.team2_score),
            "scored point"
        );
        Ok(game)
    }

    fn ensure_active(point: &Point) -> Result<()> {
        if point.is_active() {
            Ok(())
        } else {
            Err(UltistatsError::Validation(format!(
                "point {} is already finished",
                point.id_str()
            )))
        }
    }

    fn validate_line(label: &str, team: &Team, line: &[String]) -> Result<()> {
        if line.len() != LINE_SIZE {
            return Err(UltistatsError::InvalidLine(format!(
                "{} line has {} players, expected {}",
                label,
                line.len(),
                LINE_SIZE
            )));
        }

        let mut seen = HashSet::new();
        for player_id in line {
            if !seen.insert(player_id.as_str()) {
                return Err(UltistatsError::InvalidLine(format!(
                    "{} line lists player {} twice",
                    label, player_id
                )));
            }
            if !team.has_player(player_id) {
                return Err(UltistatsError::InvalidLine(format!(
                    "{} line: player {} is not on the {} roster",
                    label, player_id, team.name
                )));
            }
        }
        Ok(())
    }

    fn validate_pull(game: &Game, lineup: &Lineup, pull: &PullData) -> Result<()> {
        pull.validate().map_err(UltistatsError::Validation)?;

        let line_of = |team_id: &str| match game.side_of(team_id) {
            Some(Side::Team1) => Ok(&lineup.team1_players),
            Some(Side::Team2) => Ok(&lineup.team2_players),
            None => Err(UltistatsError::Validation(format!(
                "pull team {} is not playing in this game",
                team_id
            ))),
        };

        if !line_of(&pull.pulling_team)?.contains(&pull.pulling_player) {
            return Err(UltistatsError::Validation(format!(
                "pulling player {} is not on the pulling team's line",
                pull.pulling_player
            )));
        }
        let receiving_line = line_of(&pull.receiving_team)?;
        if let Some(receiver) = &pull.receiving_player {
            if !receiving_line.contains(receiver) {
                return Err(UltistatsError::Validation(format!(
                    "receiving player {} is not on the receiving team's line",
                    receiver
                )));
            }
        }
        Ok(())
    }
}
