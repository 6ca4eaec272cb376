use std::fs;
use std::path::PathBuf;

use matchstats::EngineError;
use matchstats::event::{Event, EventType, MatchEventSet, PassOutcome};
use matchstats::normalize::parse_events_json;
use matchstats::player_profile::{PlayerStatsReport, aggregate_player_profile};

fn fixture_set() -> MatchEventSet {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("events.json");
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    parse_events_json(3869685, &raw).expect("fixture should parse")
}

#[test]
fn full_profile_from_fixture() {
    let profile = aggregate_player_profile(&fixture_set(), "Lionel Messi").unwrap();
    assert_eq!(profile.match_id, 3869685);
    assert_eq!(profile.passes_attempted, 2);
    assert_eq!(profile.passes_completed, 2);
    assert_eq!(profile.shots, 2);
    assert_eq!(profile.shots_on_target, 1);
    assert_eq!(profile.tackles, 0);
    assert_eq!(profile.interceptions, 1);
    assert_eq!(profile.fouls_committed, 0);
    assert_eq!(profile.fouls_won, 1);
    assert_eq!(profile.minutes_played, 90);
}

#[test]
fn minutes_played_is_last_recorded_minute() {
    let profile = aggregate_player_profile(&fixture_set(), "Rodrigo De Paul").unwrap();
    assert_eq!(profile.minutes_played, 63);
    assert_eq!(profile.passes_attempted, 2);
    assert_eq!(profile.passes_completed, 1);
}

#[test]
fn defensive_and_foul_counters() {
    let profile = aggregate_player_profile(&fixture_set(), "Aurélien Tchouaméni").unwrap();
    assert_eq!(profile.tackles, 1);
    assert_eq!(profile.fouls_committed, 1);
    assert_eq!(profile.passes_attempted, 0);
    assert_eq!(profile.minutes_played, 35);
}

#[test]
fn pass_completion_scenario() {
    let set = MatchEventSet::new(
        1,
        vec![
            Event::new("1", 10, EventType::Pass, "X").with_player("A"),
            Event::new("2", 20, EventType::Pass, "X")
                .with_player("A")
                .with_pass_outcome(PassOutcome::Incomplete),
        ],
    );
    let profile = aggregate_player_profile(&set, "A").unwrap();
    assert_eq!(profile.passes_attempted, 2);
    assert_eq!(profile.passes_completed, 1);
}

#[test]
fn unknown_player_is_not_found() {
    let err = aggregate_player_profile(&fixture_set(), "Unknown Player").unwrap_err();
    match err {
        EngineError::PlayerNotFound {
            player,
            match_had_events,
            ..
        } => {
            assert_eq!(player, "Unknown Player");
            assert!(match_had_events);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_event_set_is_not_found() {
    let set = MatchEventSet::new(1, Vec::new());
    assert!(matches!(
        aggregate_player_profile(&set, "A"),
        Err(EngineError::PlayerNotFound { .. })
    ));
}

#[test]
fn aggregation_is_idempotent() {
    let set = fixture_set();
    let first = aggregate_player_profile(&set, "Lionel Messi").unwrap();
    let second = aggregate_player_profile(&set, "Lionel Messi").unwrap();
    assert_eq!(first, second);
}

#[test]
fn grouped_report_matches_flat_profile() {
    let profile = aggregate_player_profile(&fixture_set(), "Lionel Messi").unwrap();
    let report = PlayerStatsReport::from(&profile);
    assert_eq!(report.passes.completed, profile.passes_completed);
    assert_eq!(report.shots.on_target, profile.shots_on_target);
    assert_eq!(report.defensive.interceptions, 1);
    assert_eq!(report.fouls.won, 1);
    assert_eq!(report.minutes_played, 90);
}
