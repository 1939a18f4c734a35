//! Integration tests for team and player commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_workspace, printed_id, run_ok, ultistats_cmd};

#[test]
fn test_team_list_empty() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["team", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No teams found"));
}

#[test]
fn test_team_add_and_list() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let id = printed_id(&run_ok(
        temp.path(),
        &["team", "add", "Hounds", "--city", "Portland"],
    ));
    assert!(temp
        .path()
        .join("data/teams")
        .join(format!("{}.json", id))
        .is_file());

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["team", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Hounds (Portland)"));
}

#[test]
fn test_team_add_empty_name_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["team", "add", " "])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_player_add_and_list() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let team = printed_id(&run_ok(temp.path(), &["team", "add", "Hounds"]));
    run_ok(
        temp.path(),
        &["player", "add", &team, "Ann", "7", "--role", "cutter"],
    );
    run_ok(temp.path(), &["player", "add", &team, "Bo", "12"]);

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["player", "list", &team])
        .assert()
        .success()
        .stdout(predicate::str::contains("#7   Ann  (Cutter)"))
        .stdout(predicate::str::contains("#12  Bo  (Hybrid)"));

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["team", "show", &team])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hounds"))
        .stdout(predicate::str::contains("Ann"));
}

#[test]
fn test_player_add_invalid_role_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let team = printed_id(&run_ok(temp.path(), &["team", "add", "Hounds"]));
    ultistats_cmd()
        .current_dir(temp.path())
        .args(["player", "add", &team, "Ann", "7", "--role", "goalie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role"));
}

#[test]
fn test_player_add_to_missing_team_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["player", "add", "ghost", "Ann", "7"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Team not found: 'ghost'"))
        .stderr(predicate::str::contains("ultistats team list"));

    let players = fs::read_dir(temp.path().join("data/players"))
        .unwrap()
        .count();
    assert_eq!(players, 0);
}

#[test]
fn test_player_remove() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let team = printed_id(&run_ok(temp.path(), &["team", "add", "Hounds"]));
    let ann = printed_id(&run_ok(temp.path(), &["player", "add", &team, "Ann", "7"]));

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["player", "remove", &team, &ann])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed player"));

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["player", "list", &team])
        .assert()
        .success()
        .stdout(predicate::str::contains("No players found"));

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["player", "remove", &team, &ann])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not on team"));
}

#[test]
fn test_team_delete_removes_players() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let team = printed_id(&run_ok(temp.path(), &["team", "add", "Hounds"]));
    run_ok(temp.path(), &["player", "add", &team, "Ann", "7"]);
    run_ok(temp.path(), &["player", "add", &team, "Bo", "8"]);

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["team", "delete", &team])
        .assert()
        .success()
        .stdout(predicate::str::contains("and 2 players"));

    assert_eq!(
        fs::read_dir(temp.path().join("data/players")).unwrap().count(),
        0
    );
    assert_eq!(
        fs::read_dir(temp.path().join("data/teams")).unwrap().count(),
        0
    );
}

#[test]
fn test_records_are_pretty_printed_json() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let team = printed_id(&run_ok(temp.path(), &["team", "add", "Hounds"]));
    let ann = printed_id(&run_ok(temp.path(), &["player", "add", &team, "Ann", "7"]));

    let content =
        fs::read_to_string(temp.path().join("data/players").join(format!("{}.json", ann)))
            .unwrap();
    assert!(content.contains("\n  \"name\": \"Ann\""));
    assert!(content.contains("\n  \"created_at\": "));
    assert!(content.contains("\"goals\": 0"));
    assert!(!content.contains("updated_at"));

    let team_content =
        fs::read_to_string(temp.path().join("data/teams").join(format!("{}.json", team)))
            .unwrap();
    assert!(team_content.contains(&ann));
    assert!(team_content.contains("updated_at"));
}

#[test]
fn test_hand_written_record_is_listed() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    fs::write(
        temp.path().join("data/teams/1710497430123.json"),
        r#"{"id": "1710497430123", "name": "Legacy", "city": "Eugene", "players": [], "created_at": "2024-03-15T10:00:00.000000"}"#,
    )
    .unwrap();
    fs::write(temp.path().join("data/teams/README.txt"), "ignored").unwrap();

    ultistats_cmd()
        .current_dir(temp.path())
        .args(["team", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1710497430123  Legacy (Eugene)"));
}
