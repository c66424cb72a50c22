use clap::Parser;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use volleyball_matcher::cli::Args;
use volleyball_matcher::commands::{validate_args, write_once_output};
use volleyball_matcher::config::Config;
use volleyball_matcher::navigation::NavigationState;
use volleyball_matcher::{Bracket, Route};

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["volleyball_matcher"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

fn once_output(extra: &[&str], config: &Config, bracket: &Bracket) -> String {
    let args = args(extra);
    validate_args(&args).unwrap();
    let mut out = Vec::new();
    write_once_output(&args, config, bracket, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_once_team_generator_uses_config_defaults() {
    let output = once_output(&["--once", "--plain"], &Config::default(), &Bracket::default());

    assert!(output.contains("Where we get tinder'd into volleyball matches and more"));
    assert!(output.contains("Number of People: 13"));
    assert!(output.contains("Net Count: 2"));
    assert_eq!(output.matches("[1]").count(), 7);
    assert_eq!(output.matches("[2]").count(), 6);
    assert!(!output.contains('\x1b'));
}

#[test]
fn test_once_same_seed_gives_same_output() {
    let config = Config::default();
    let first = once_output(&["--once", "-p", "--seed", "99", "-n", "30", "-t", "4"], &config, &Bracket::default());
    let second = once_output(&["--once", "-p", "--seed", "99", "-n", "30", "-t", "4"], &config, &Bracket::default());

    let tokens = |output: &str| {
        output
            .lines()
            .filter(|line| line.contains('['))
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    assert_eq!(tokens(&first), tokens(&second));
}

#[test]
fn test_once_zero_people_hides_tokens() {
    let output = once_output(&["--once", "-p", "-n", "0"], &Config::default(), &Bracket::default());
    assert!(output.contains("Team Sequences:"));
    assert!(!output.contains("[1]"));
}

#[test]
fn test_once_tournament_view_from_hash() {
    let output = once_output(
        &["--once", "-p", "--view", "#tournament-generator"],
        &Config::default(),
        &Bracket::sample(),
    );

    assert!(output.contains("[2 Tournament Generator]"));
    assert!(output.contains("Here you can manage and create your tournament brackets and schedules."));
    assert!(output.contains("Quarter-finals"));
    assert!(output.contains("> Team Hotel"));
    assert!(!output.contains("Team Sequences:"));
}

#[test]
fn test_once_misc_view() {
    let output = once_output(&["--once", "-p", "--view", "misc"], &Config::default(), &Bracket::default());
    assert!(output.contains("Any other tools or utilities can go here."));
    assert!(output.contains("MATCHER 203"));
}

#[test]
fn test_unknown_view_falls_back_to_team_generator() {
    let output = once_output(&["--once", "-p", "--view", "#unknown"], &Config::default(), &Bracket::default());
    assert!(output.contains("[1 Team Generator]"));
    assert!(output.contains("Random Team Generator"));
}

#[test]
fn test_navigation_state_follows_hashes() {
    let mut navigation = NavigationState::new(Route::TeamGenerator);
    assert!(navigation.navigate_to_hash("#misc"));
    assert_eq!(navigation.current(), Route::Misc);
    assert!(!navigation.navigate_to_hash("misc"));
    assert!(navigation.navigate_to_hash(""));
    assert_eq!(navigation.current(), Route::TeamGenerator);
}

#[tokio::test]
async fn test_bracket_file_is_rendered() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bracket.toml");
    fs::write(
        &path,
        r#"
[[rounds]]
title = "Final"

[[rounds.seeds]]
id = 1
teams = [{ name = "Sand Sharks", score = 2 }, { name = "Net Ninjas", score = 2 }]
"#,
    )
    .unwrap();

    let bracket = Bracket::load_or_sample(path.to_str()).await;
    let output = once_output(
        &["--once", "-p", "--view", "tournament-generator"],
        &Config::default(),
        &bracket,
    );

    assert!(output.contains("Final"));
    // Ties go to the second team
    assert!(output.contains("  Sand Sharks            2"));
    assert!(output.contains("> Net Ninjas             2"));
}

#[tokio::test]
async fn test_broken_bracket_file_falls_back_to_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bracket.toml");
    fs::write(&path, "rounds = 5").unwrap();

    let bracket = Bracket::load_or_sample(path.to_str()).await;
    assert_eq!(bracket, Bracket::sample());
}

#[tokio::test]
#[serial]
async fn test_config_round_trip_feeds_once_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    let config = Config {
        default_people: 9,
        default_nets: 3,
        ..Config::default()
    };
    config.save_to_path(path).await.unwrap();

    let loaded = Config::load_with_overrides(path).await.unwrap();
    let output = once_output(&["--once", "-p"], &loaded, &Bracket::default());
    assert!(output.contains("Number of People: 9"));
    assert!(output.contains("Players per Net: Net 1: 3  Net 2: 3  Net 3: 3"));
}

#[test]
fn test_json_output_for_explicit_inputs() {
    let output = once_output(
        &["--once", "--json", "--seed", "1", "-n", "4", "-t", "4"],
        &Config::default(),
        &Bracket::default(),
    );
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let mut sequence: Vec<u64> = value["sequence"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    sequence.sort_unstable();
    assert_eq!(sequence, vec![1, 2, 3, 4]);
}
