use std::fs;
use std::path::PathBuf;

use matchstats::main_events::filter_main_events;
use matchstats::normalize::parse_events_json;
use matchstats::player_profile::aggregate_player_profile;
use matchstats::serialize::{
    main_events_from_json, player_profile_from_json, to_json, to_json_pretty,
};
use serde_json::Value;

fn fixture_set() -> matchstats::MatchEventSet {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("events.json");
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    parse_events_json(3869685, &raw).expect("fixture should parse")
}

#[test]
fn main_events_round_trip() {
    let summary = filter_main_events(&fixture_set());
    let parsed = main_events_from_json(&to_json(&summary).unwrap()).unwrap();
    assert_eq!(parsed, summary);
}

#[test]
fn player_profile_round_trip() {
    let profile = aggregate_player_profile(&fixture_set(), "Lionel Messi").unwrap();
    let parsed = player_profile_from_json(&to_json_pretty(&profile).unwrap()).unwrap();
    assert_eq!(parsed, profile);
}

#[test]
fn profile_uses_collaborator_field_names() {
    let profile = aggregate_player_profile(&fixture_set(), "Lionel Messi").unwrap();
    let value: Value = serde_json::from_str(&to_json(&profile).unwrap()).unwrap();
    for key in [
        "passes_completed",
        "passes_attempted",
        "shots",
        "shots_on_target",
        "tackles",
        "interceptions",
        "fouls_committed",
        "minutes_played",
    ] {
        assert!(value.get(key).is_some_and(Value::is_u64), "missing {key}");
    }
}

#[test]
fn summary_has_no_null_values() {
    let summary = filter_main_events(&fixture_set());
    let json = to_json(&summary).unwrap();
    assert!(!json.contains("null"));
    let value: Value = serde_json::from_str(&json).unwrap();
    assert!(value["goals"].is_array());
    assert!(value["assists"].is_array());
    assert!(value["cards"][0]["card_type"].is_string());
}
