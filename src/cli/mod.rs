//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, GameCommand, PlayerCommand, PointCommand, TeamCommand};
pub use output::{
    format_game_detail, format_game_list, format_player_list, format_point_list,
    format_stats_table, format_team_list,
};
