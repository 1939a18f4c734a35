//! Team and player roster management

use crate::domain::{EntityKind, Player, PlayerRole, Record, Team};
use crate::error::{Result, UltistatsError};
use crate::infrastructure::Repositories;
use tracing::info;

/// Service for managing teams and their players
pub struct RosterService {
    repos: Repositories,
}

impl RosterService {
    pub fn new(repos: Repositories) -> Self {
        RosterService { repos }
    }

    pub fn create_team(&self, name: &str, city: &str) -> Result<Team> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UltistatsError::Validation(
                "team name cannot be empty".to_string(),
            ));
        }

        let team = self.repos.teams.create_team(name, city.trim())?;
        info!(team_id = %team.id_str(), name = %team.name, "created team");
        Ok(team)
    }

    pub fn teams(&self) -> Result<Vec<Team>> {
        self.repos.teams.list_all()
    }

    pub fn team(&self, team_id: &str) -> Result<Team> {
        self.repos
            .teams
            .find_by_id(team_id)?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Team, team_id))
    }

    /// Delete a team together with every player on its roster.
    /// Returns the number of player records removed.
    pub fn delete_team(&self, team_id: &str) -> Result<usize> {
        let team = self.team(team_id)?;

        let mut removed = 0;
        for player_id in &team.players {
            if self.repos.players.delete(player_id)? {
                removed += 1;
            }
        }
        self.repos.teams.delete(team_id)?;

        info!(team_id = %team_id, players = removed, "deleted team");
        Ok(removed)
    }

    /// Create a player and put them on the team's roster
    pub fn add_player(
        &self,
        team_id: &str,
        name: &str,
        number: u32,
        role: PlayerRole,
    ) -> Result<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UltistatsError::Validation(
                "player name cannot be empty".to_string(),
            ));
        }
        // Fail before creating a player that would be orphaned
        self.team(team_id)?;

        let player = self.repos.players.create_player(name, number, role)?;
        self.repos
            .teams
            .add_player_to_team(team_id, player.id_str())?
            .ok_or_else(|| UltistatsError::not_found(EntityKind::Team, team_id))?;

        info!(team_id = %team_id, player_id = %player.id_str(), "added player");
        Ok(player)
    }

    /// Take a player off the roster and delete the player record.
    /// Returns false if the player was not on this team.
    pub fn remove_player(&self, team_id: &str, player_id: &str) -> Result<bool> {
        let team = self.team(team_id)?;
        if !team.has_player(player_id) {
            return Ok(false);
        }

        self.repos.teams.remove_player_from_team(team_id, player_id)?;
        self.repos.players.delete(player_id)?;

        info!(team_id = %team_id, player_id = %player_id, "removed player");
        Ok(true)
    }

    /// Players on a team, skipping roster entries whose record is gone
    pub fn players(&self, team_id: &str) -> Result<Vec<Player>> {
        self.team(team_id)?;
        self.repos
            .players
            .find_by_team_id(&self.repos.teams, team_id)
    }
}
