use serde::{Deserialize, Serialize};

use crate::event::{Event, EventType, ShotOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Goal,
    Assist,
    Card,
    Pass,
    Shot,
    Tackle,
    Interception,
    FoulCommitted,
    FoulWon,
    Other,
}

/// Headline category of an event. Goals and assists take precedence over the
/// plain shot and pass categories they are drawn from.
pub fn classify(event: &Event) -> EventCategory {
    if is_goal(event) {
        return EventCategory::Goal;
    }
    if is_assist(event) {
        return EventCategory::Assist;
    }
    match &event.event_type {
        EventType::Card => EventCategory::Card,
        EventType::Pass => EventCategory::Pass,
        EventType::Shot => EventCategory::Shot,
        EventType::Tackle => EventCategory::Tackle,
        EventType::Interception => EventCategory::Interception,
        EventType::FoulCommitted => EventCategory::FoulCommitted,
        EventType::FoulWon => EventCategory::FoulWon,
        EventType::Other(_) => EventCategory::Other,
    }
}

pub fn is_goal(event: &Event) -> bool {
    event.event_type == EventType::Shot && event.shot_outcome == Some(ShotOutcome::Goal)
}

pub fn is_assist(event: &Event) -> bool {
    event.event_type == EventType::Pass && event.pass_assist.unwrap_or(false)
}

pub fn is_card(event: &Event) -> bool {
    event.event_type == EventType::Card
}

/// A pass with no outcome marker is a completed pass. The provider only
/// attaches an outcome when the pass failed.
pub fn is_successful_pass(event: &Event) -> bool {
    event.event_type == EventType::Pass && event.pass_outcome.is_none()
}

/// Only the literal "On Target" outcome counts; "Saved" and "Goal" do not.
pub fn is_shot_on_target(event: &Event) -> bool {
    event.event_type == EventType::Shot && event.shot_outcome == Some(ShotOutcome::OnTarget)
}
