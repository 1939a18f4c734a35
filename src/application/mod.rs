//! Application layer - Use cases and orchestration

pub mod game_tracking;
pub mod init;
pub mod manage_config;
pub mod player_stats;
pub mod roster;

pub use game_tracking::{GameTrackingService, Goal, Lineup};
pub use manage_config::ConfigService;
pub use player_stats::{PlayerStatLine, PlayerStatsService, StatsReport};
pub use roster::RosterService;
