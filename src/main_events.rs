use serde::{Deserialize, Serialize};

use crate::classify::{EventCategory, classify};
use crate::event::{CardType, Event, MatchEventSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainEventEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    pub team: String,
    pub minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    pub team: String,
    pub minute: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
}

/// Goals, assists and cards of one match, each ordered by minute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainEventsSummary {
    pub goals: Vec<MainEventEntry>,
    pub assists: Vec<MainEventEntry>,
    pub cards: Vec<CardEntry>,
}

impl MainEventsSummary {
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty() && self.assists.is_empty() && self.cards.is_empty()
    }
}

pub fn filter_main_events(set: &MatchEventSet) -> MainEventsSummary {
    let mut summary = MainEventsSummary::default();

    for event in &set.events {
        match classify(event) {
            EventCategory::Goal => summary.goals.push(entry(event)),
            EventCategory::Assist => summary.assists.push(entry(event)),
            EventCategory::Card if set.card_field_present => summary.cards.push(CardEntry {
                player: event.player.clone(),
                team: event.team.clone(),
                minute: event.minute,
                card_type: event.card_type.clone(),
            }),
            _ => {}
        }
    }

    // sort_by_key is stable: same-minute entries keep feed order.
    summary.goals.sort_by_key(|e| e.minute);
    summary.assists.sort_by_key(|e| e.minute);
    summary.cards.sort_by_key(|e| e.minute);
    summary
}

fn entry(event: &Event) -> MainEventEntry {
    MainEventEntry {
        player: event.player.clone(),
        team: event.team.clone(),
        minute: event.minute,
    }
}
