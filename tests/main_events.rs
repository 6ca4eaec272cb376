use std::fs;
use std::path::PathBuf;

use matchstats::event::{CardType, Event, EventType, MatchEventSet, ShotOutcome};
use matchstats::main_events::{MainEventEntry, filter_main_events};
use matchstats::normalize::parse_events_json;

fn fixture_set(name: &str) -> MatchEventSet {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    parse_events_json(1, &raw).expect("fixture should parse")
}

#[test]
fn goals_are_exactly_shots_with_goal_outcome() {
    let set = fixture_set("events.json");
    let summary = filter_main_events(&set);

    let manual = set
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Shot && e.shot_outcome == Some(ShotOutcome::Goal))
        .count();
    assert_eq!(summary.goals.len(), manual);
    assert_eq!(summary.goals.len(), 3);
    assert_eq!(summary.goals[0].player.as_deref(), Some("Julián Álvarez"));
    assert_eq!(summary.goals[2].minute, 81);
}

#[test]
fn assists_and_cards_from_fixture() {
    let summary = filter_main_events(&fixture_set("events.json"));
    assert_eq!(
        summary.assists,
        vec![MainEventEntry {
            player: Some("Lionel Messi".to_string()),
            team: "Argentina".to_string(),
            minute: 22,
        }]
    );
    assert_eq!(summary.cards.len(), 2);
    assert_eq!(summary.cards[0].minute, 35);
    assert_eq!(summary.cards[1].card_type, Some(CardType::Yellow));
}

#[test]
fn all_sequences_are_sorted_by_minute() {
    let summary = filter_main_events(&fixture_set("events.json"));
    assert!(summary.goals.windows(2).all(|w| w[0].minute <= w[1].minute));
    assert!(summary.assists.windows(2).all(|w| w[0].minute <= w[1].minute));
    assert!(summary.cards.windows(2).all(|w| w[0].minute <= w[1].minute));
}

#[test]
fn same_minute_entries_keep_feed_order() {
    let card = |id: &str, minute: u32, player: &str| {
        Event::new(id, minute, EventType::Card, "X")
            .with_player(player)
            .with_card_type(CardType::Yellow)
    };
    let set = MatchEventSet::new(
        1,
        vec![card("1", 60, "Late"), card("2", 30, "First"), card("3", 30, "Second")],
    );
    let order: Vec<_> = filter_main_events(&set)
        .cards
        .into_iter()
        .map(|c| c.player.unwrap_or_default())
        .collect();
    assert_eq!(order, vec!["First", "Second", "Late"]);
}

#[test]
fn missing_card_schema_yields_no_cards() {
    let summary = filter_main_events(&fixture_set("events_no_cards.json"));
    assert!(summary.cards.is_empty());
    assert_eq!(summary.goals.len(), 1);
    assert_eq!(summary.assists.len(), 1);
}

#[test]
fn single_goal_scenario() {
    let set = MatchEventSet::new(
        1,
        vec![
            Event::new("1", 5, EventType::Shot, "X")
                .with_player("A")
                .with_shot_outcome(ShotOutcome::Goal),
        ],
    );
    let summary = filter_main_events(&set);
    assert_eq!(summary.goals.len(), 1);
    assert_eq!(summary.goals[0].team, "X");
    assert_eq!(summary.goals[0].minute, 5);
    assert!(summary.assists.is_empty());
    assert!(summary.cards.is_empty());
}
