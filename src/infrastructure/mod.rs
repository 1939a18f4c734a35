//! Infrastructure layer - Persistence and workspace configuration

pub mod config;
pub mod repositories;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use repositories::{
    GameRepository, PlayerRepository, PointRepository, Repositories, TeamRepository,
};
pub use store::JsonStore;
pub use workspace::{FileSystemWorkspace, WorkspaceRepository};
