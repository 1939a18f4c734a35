//! ultistats - Ultimate Frisbee statistics recorder
//!
//! Records teams, players, games and points as one JSON file per record,
//! and derives basic player statistics from the recorded points.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::UltistatsError;
