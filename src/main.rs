use clap::Parser;
use std::collections::HashMap;
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ultistats::application::{
    init::init, ConfigService, GameTrackingService, Goal, Lineup, PlayerStatsService,
    RosterService,
};
use ultistats::cli::{
    format_game_detail, format_game_list, format_player_list, format_point_list,
    format_stats_table, format_team_list, Cli, Commands, GameCommand, PlayerCommand,
    PointCommand, TeamCommand,
};
use ultistats::domain::{
    DiscEvent, PlayerRole, PointEvent, PullData, PullLocation, PullReception, Record,
};
use ultistats::error::{Result, UltistatsError};
use ultistats::infrastructure::{FileSystemWorkspace, Repositories};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_repositories() -> Result<Repositories> {
    FileSystemWorkspace::discover()?.repositories()
}

fn parse_arg<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    T::from_str(value).map_err(UltistatsError::Validation)
}

fn team_names(service: &RosterService) -> Result<HashMap<String, String>> {
    Ok(service
        .teams()?
        .into_iter()
        .map(|team| (team.id_str().to_string(), team.name))
        .collect())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized ultistats workspace at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemWorkspace::discover()?);

            if list {
                let config = service.list()?;
                println!("data_dir = {}", config.data_dir.display());
                println!("teams_dir = {}", config.teams_dir);
                println!("players_dir = {}", config.players_dir);
                println!("games_dir = {}", config.games_dir);
                println!("points_dir = {}", config.points_dir);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: ultistats config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: data_dir, teams_dir, players_dir, games_dir, points_dir, created"
                );
            }
            Ok(())
        }
        Commands::Team { command } => run_team(command),
        Commands::Player { command } => run_player(command),
        Commands::Game { command } => run_game(command),
        Commands::Point { command } => run_point(command),
        Commands::Stats { team, save } => {
            let service = PlayerStatsService::new(open_repositories()?);
            let report = service.execute(team.as_deref(), save)?;
            println!("{}", format_stats_table(&report.lines).trim_end());
            if save {
                println!("Saved stats for {} players", report.saved);
            }
            Ok(())
        }
    }
}

fn run_team(command: TeamCommand) -> Result<()> {
    let service = RosterService::new(open_repositories()?);

    match command {
        TeamCommand::Add { name, city } => {
            let team = service.create_team(&name, &city)?;
            println!("Created team {} ({})", team.name, team.id_str());
        }
        TeamCommand::List => {
            println!("{}", format_team_list(&service.teams()?).trim_end());
        }
        TeamCommand::Show { team_id } => {
            let team = service.team(&team_id)?;
            println!("{} ({})", team.name, team.city);
            println!("{}", format_player_list(&service.players(&team_id)?).trim_end());
        }
        TeamCommand::Delete { team_id } => {
            let removed = service.delete_team(&team_id)?;
            println!("Deleted team {} and {} players", team_id, removed);
        }
    }
    Ok(())
}

fn run_player(command: PlayerCommand) -> Result<()> {
    let service = RosterService::new(open_repositories()?);

    match command {
        PlayerCommand::Add {
            team_id,
            name,
            number,
            role,
        } => {
            let role: PlayerRole = parse_arg(&role)?;
            let player = service.add_player(&team_id, &name, number, role)?;
            println!(
                "Added #{} {} ({}) as {}",
                player.number,
                player.name,
                player.role,
                player.id_str()
            );
        }
        PlayerCommand::List { team_id } => {
            println!("{}", format_player_list(&service.players(&team_id)?).trim_end());
        }
        PlayerCommand::Remove { team_id, player_id } => {
            if service.remove_player(&team_id, &player_id)? {
                println!("Removed player {}", player_id);
            } else {
                println!("Player {} is not on team {}", player_id, team_id);
            }
        }
    }
    Ok(())
}

fn run_game(command: GameCommand) -> Result<()> {
    let repos = open_repositories()?;
    let names = team_names(&RosterService::new(repos.clone()))?;
    let service = GameTrackingService::new(repos);

    match command {
        GameCommand::Start { team1_id, team2_id } => {
            let game = service.start_game(&team1_id, &team2_id)?;
            println!("Started game {}", game.id_str());
        }
        GameCommand::List => {
            println!("{}", format_game_list(&service.games()?, &names).trim_end());
        }
        GameCommand::Show { game_id } => {
            let game = service.game(&game_id)?;
            println!("{}", format_game_detail(&game, &names).trim_end());
        }
        GameCommand::Finish { game_id } => {
            let game = service.finish_game(&game_id)?;
            println!(
                "Finished game {}: {} - {}",
                game_id, game.team1_score, game.team2_score
            );
        }
    }
    Ok(())
}

fn run_point(command: PointCommand) -> Result<()> {
    let service = GameTrackingService::new(open_repositories()?);

    match command {
        PointCommand::Start {
            game_id,
            team1,
            team2,
            puller,
            pulling_team,
            pull_location,
            reception,
            brick,
            receiver,
        } => {
            let pull = match (puller, pulling_team, pull_location) {
                (Some(pulling_player), Some(pulling_team), Some(location)) => {
                    let game = service.game(&game_id)?;
                    let receiving_team = if pulling_team == game.team1_id {
                        game.team2_id
                    } else {
                        game.team1_id
                    };
                    Some(PullData {
                        pulling_player,
                        pulling_team,
                        pull_location: parse_arg::<PullLocation>(&location)?,
                        catch_or_lift: reception
                            .as_deref()
                            .map(parse_arg::<PullReception>)
                            .transpose()?,
                        brick_called: brick,
                        receiving_player: receiver,
                        receiving_team,
                    })
                }
                _ => None,
            };

            let lineup = Lineup {
                team1_players: team1,
                team2_players: team2,
                pull,
            };
            let point = service.start_point(&game_id, lineup)?;
            println!("Started point {}", point.id_str());
        }
        PointCommand::Event {
            point_id,
            kind,
            player,
            team,
        } => {
            let mut event = PointEvent::new(parse_arg::<DiscEvent>(&kind)?);
            event.player_id = player;
            event.team_id = team;
            let point = service.record_event(&point_id, event)?;
            println!("Recorded {} ({} events)", kind, point.events.len());
        }
        PointCommand::Score {
            point_id,
            team_id,
            scorer,
            assist,
        } => {
            let goal = Goal {
                scoring_team: team_id,
                scorer,
                assist,
            };
            let game = service.score_point(&point_id, goal)?;
            println!("Score: {} - {}", game.team1_score, game.team2_score);
        }
        PointCommand::List { game_id } => {
            println!("{}", format_point_list(&service.points(&game_id)?).trim_end());
        }
    }
    Ok(())
}
