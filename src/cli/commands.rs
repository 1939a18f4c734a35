//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ultistats")]
#[command(about = "Ultimate Frisbee statistics recorder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage teams
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },

    /// Manage players on a team roster
    Player {
        #[command(subcommand)]
        command: PlayerCommand,
    },

    /// Start, inspect and finish games
    Game {
        #[command(subcommand)]
        command: GameCommand,
    },

    /// Record points within a game
    Point {
        #[command(subcommand)]
        command: PointCommand,
    },

    /// Show player statistics derived from recorded points
    Stats {
        /// Only players on this team
        #[arg(long)]
        team: Option<String>,

        /// Write the computed counters back into the player records
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// Create a team
    Add {
        name: String,

        #[arg(long, default_value = "")]
        city: String,
    },

    /// List all teams
    List,

    /// Show a team and its roster
    Show { team_id: String },

    /// Delete a team and every player on its roster
    Delete { team_id: String },
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Create a player on a team
    Add {
        team_id: String,
        name: String,
        number: u32,

        /// Player role (handler, cutter, hybrid)
        #[arg(short, long, default_value = "hybrid")]
        role: String,
    },

    /// List the players on a team
    List { team_id: String },

    /// Take a player off a team and delete the player
    Remove { team_id: String, player_id: String },
}

#[derive(Subcommand, Debug)]
pub enum GameCommand {
    /// Start a game between two teams
    Start { team1_id: String, team2_id: String },

    /// List all games
    List,

    /// Show a game's score and point history
    Show { game_id: String },

    /// Mark a game as finished
    Finish { game_id: String },
}

#[derive(Subcommand, Debug)]
pub enum PointCommand {
    /// Start a point with both lines on the field
    Start {
        game_id: String,

        /// Comma-separated player ids for team 1
        #[arg(long, value_delimiter = ',', required = true)]
        team1: Vec<String>,

        /// Comma-separated player ids for team 2
        #[arg(long, value_delimiter = ',', required = true)]
        team2: Vec<String>,

        /// Player who pulled
        #[arg(long, requires_all = ["pulling_team", "pull_location"])]
        puller: Option<String>,

        /// Team that pulled
        #[arg(long)]
        pulling_team: Option<String>,

        /// Where the pull landed (in_bounds, out_of_bounds)
        #[arg(long)]
        pull_location: Option<String>,

        /// How an in-bounds pull was received (catch, lift)
        #[arg(long, requires = "puller")]
        reception: Option<String>,

        /// Brick called on an out-of-bounds pull
        #[arg(long, requires = "puller")]
        brick: bool,

        /// Player who received the pull
        #[arg(long, requires = "puller")]
        receiver: Option<String>,
    },

    /// Record an event during a point
    Event {
        point_id: String,

        /// Event type (pass, defense, drop, turnover, timeout, score, injury, call)
        kind: String,

        #[arg(long)]
        player: Option<String>,

        #[arg(long)]
        team: Option<String>,
    },

    /// Finish a point with a goal
    Score {
        point_id: String,
        team_id: String,

        #[arg(long)]
        scorer: Option<String>,

        #[arg(long)]
        assist: Option<String>,
    },

    /// List the points of a game
    List { game_id: String },
}
