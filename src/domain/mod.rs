//! Domain layer - Entities and statistics

pub mod game;
pub mod player;
pub mod point;
pub mod record;
pub mod stats;
pub mod team;

pub use game::{Game, GameStatus, PointOutcome, Side};
pub use player::{Player, PlayerRole, PlayerStats};
pub use point::{
    DiscEvent, Point, PointEvent, PointStatus, PullData, PullLocation, PullReception, LINE_SIZE,
};
pub use record::{timestamp_now, EntityKind, Record, RecordMeta};
pub use stats::StatsTally;
pub use team::Team;
