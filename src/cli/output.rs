//! Output formatting utilities

use crate::application::PlayerStatLine;
use crate::domain::{Game, GameStatus, Player, Point, PointStatus, Record, Team};
use std::collections::HashMap;

/// Format a list of teams for display
pub fn format_team_list(teams: &[Team]) -> String {
    if teams.is_empty() {
        return "No teams found".to_string();
    }

    let mut output = String::new();
    for team in teams {
        let city = if team.city.is_empty() {
            String::new()
        } else {
            format!(" ({})", team.city)
        };
        output.push_str(&format!(
            "{}  {}{}  [{} players]\n",
            team.id_str(),
            team.name,
            city,
            team.players.len()
        ));
    }
    output
}

/// Format a roster for display
pub fn format_player_list(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players found".to_string();
    }

    let mut output = String::new();
    for player in players {
        output.push_str(&format!(
            "{}  #{:<3} {}  ({})\n",
            player.id_str(),
            player.number,
            player.name,
            player.role
        ));
    }
    output
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Active => "active",
        GameStatus::Finished => "finished",
    }
}

/// Format games as `team1 score - score team2` lines; `names` maps team ids to names
pub fn format_game_list(games: &[Game], names: &HashMap<String, String>) -> String {
    if games.is_empty() {
        return "No games found".to_string();
    }

    let name = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

    let mut output = String::new();
    for game in games {
        output.push_str(&format!(
            "{}  {} {} - {} {}  [{}]\n",
            game.id_str(),
            name(&game.team1_id),
            game.team1_score,
            game.team2_score,
            name(&game.team2_id),
            status_label(game.status)
        ));
    }
    output
}

/// Format one game with its point history
pub fn format_game_detail(game: &Game, names: &HashMap<String, String>) -> String {
    let name = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

    let mut output = format_game_list(std::slice::from_ref(game), names);
    if game.points.is_empty() {
        output.push_str("No points played\n");
        return output;
    }

    let (mut team1, mut team2) = (0, 0);
    for (n, outcome) in game.points.iter().enumerate() {
        if outcome.scoring_team == game.team1_id {
            team1 += 1;
        } else {
            team2 += 1;
        }
        output.push_str(&format!(
            "  {:>2}. {:<2}-{:>2}  {}\n",
            n + 1,
            team1,
            team2,
            name(&outcome.scoring_team)
        ));
    }
    output
}

/// Format the points of a game
pub fn format_point_list(points: &[Point]) -> String {
    if points.is_empty() {
        return "No points found".to_string();
    }

    let mut output = String::new();
    for point in points {
        let status = match point.status {
            PointStatus::Active => "active",
            PointStatus::Finished => "finished",
        };
        output.push_str(&format!(
            "{}  {} events  [{}]\n",
            point.id_str(),
            point.events.len(),
            status
        ));
    }
    output
}

/// Format the statistics table
pub fn format_stats_table(lines: &[PlayerStatLine]) -> String {
    if lines.is_empty() {
        return "No players found".to_string();
    }

    let mut output = format!(
        "{:<20} {:<16} {:>5} {:>6} {:>5} {:>7} {:>6}\n",
        "Player", "Team", "Games", "Points", "Goals", "Assists", "Blocks"
    );
    for line in lines {
        let label = format!("#{} {}", line.player.number, line.player.name);
        output.push_str(&format!(
            "{:<20} {:<16} {:>5} {:>6} {:>5} {:>7} {:>6}\n",
            label,
            line.team_name.as_deref().unwrap_or("-"),
            line.stats.games_played,
            line.stats.points_played,
            line.stats.goals,
            line.stats.assists,
            line.stats.blocks
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerRole, PlayerStats, PointOutcome};

    fn with_id<T>(mut record: T, id: &str, set: impl FnOnce(&mut T, String)) -> T {
        set(&mut record, id.to_string());
        record
    }

    fn team(id: &str, name: &str, city: &str) -> Team {
        with_id(Team::new(name, city), id, |t, id| t.meta.id = Some(id))
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_team_list(&[]), "No teams found");
        assert_eq!(format_player_list(&[]), "No players found");
        assert_eq!(format_game_list(&[], &HashMap::new()), "No games found");
        assert_eq!(format_point_list(&[]), "No points found");
        assert_eq!(format_stats_table(&[]), "No players found");
    }

    #[test]
    fn test_format_team_list() {
        let teams = vec![team("1", "Hounds", "Portland"), team("2", "Nomads", "")];
        let output = format_team_list(&teams);
        assert!(output.contains("1  Hounds (Portland)  [0 players]"));
        assert!(output.contains("2  Nomads  [0 players]"));
    }

    #[test]
    fn test_format_player_list() {
        let player = with_id(Player::new("Ann", 7, PlayerRole::Cutter), "p1", |p, id| {
            p.meta.id = Some(id)
        });
        let output = format_player_list(&[player]);
        assert!(output.contains("p1  #7   Ann  (Cutter)"));
    }

    #[test]
    fn test_format_game_uses_team_names() {
        let mut game = with_id(Game::new("a", "b"), "g1", |g, id| g.meta.id = Some(id));
        game.record_outcome(PointOutcome::new("a"));
        game.record_outcome(PointOutcome::new("b"));
        game.record_outcome(PointOutcome::new("a"));

        let mut names = HashMap::new();
        names.insert("a".to_string(), "Hounds".to_string());

        let list = format_game_list(std::slice::from_ref(&game), &names);
        assert!(list.contains("g1  Hounds 2 - 1 b  [active]"));

        let detail = format_game_detail(&game, &names);
        assert!(detail.contains(" 3. 2 - 1  Hounds"));
    }

    #[test]
    fn test_format_stats_table() {
        let player = Player::new("Ann", 7, PlayerRole::Cutter);
        let lines = vec![PlayerStatLine {
            player,
            team_name: Some("Hounds".to_string()),
            stats: PlayerStats {
                goals: 3,
                ..Default::default()
            },
        }];
        let output = format_stats_table(&lines);
        assert!(output.starts_with("Player"));
        assert!(output.contains("#7 Ann"));
        assert!(output.contains("Hounds"));
    }
}
