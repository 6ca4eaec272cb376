use serde::{Deserialize, Serialize};

/// Event taxonomy as reported by the upstream feed.
///
/// Anything the engine does not aggregate is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Pass,
    Shot,
    Card,
    Tackle,
    Interception,
    FoulCommitted,
    FoulWon,
    Other(String),
}

impl EventType {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Pass" => EventType::Pass,
            "Shot" => EventType::Shot,
            "Card" => EventType::Card,
            "Tackle" => EventType::Tackle,
            "Interception" => EventType::Interception,
            "Foul Committed" => EventType::FoulCommitted,
            "Foul Won" => EventType::FoulWon,
            other => EventType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::Pass => "Pass",
            EventType::Shot => "Shot",
            EventType::Card => "Card",
            EventType::Tackle => "Tackle",
            EventType::Interception => "Interception",
            EventType::FoulCommitted => "Foul Committed",
            EventType::FoulWon => "Foul Won",
            EventType::Other(name) => name,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        EventType::from_name(&value)
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShotOutcome {
    Goal,
    OnTarget,
    Saved,
    OffTarget,
    Blocked,
    Wayward,
    Post,
    Other(String),
}

impl ShotOutcome {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Goal" => ShotOutcome::Goal,
            "On Target" => ShotOutcome::OnTarget,
            "Saved" => ShotOutcome::Saved,
            "Off T" => ShotOutcome::OffTarget,
            "Blocked" => ShotOutcome::Blocked,
            "Wayward" => ShotOutcome::Wayward,
            "Post" => ShotOutcome::Post,
            other => ShotOutcome::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ShotOutcome::Goal => "Goal",
            ShotOutcome::OnTarget => "On Target",
            ShotOutcome::Saved => "Saved",
            ShotOutcome::OffTarget => "Off T",
            ShotOutcome::Blocked => "Blocked",
            ShotOutcome::Wayward => "Wayward",
            ShotOutcome::Post => "Post",
            ShotOutcome::Other(name) => name,
        }
    }
}

impl From<String> for ShotOutcome {
    fn from(value: String) -> Self {
        ShotOutcome::from_name(&value)
    }
}

impl From<ShotOutcome> for String {
    fn from(value: ShotOutcome) -> Self {
        value.as_str().to_string()
    }
}

/// Present only when a pass did not find its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PassOutcome {
    Incomplete,
    Out,
    Offside,
    Unknown,
    InjuryClearance,
    Other(String),
}

impl PassOutcome {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Incomplete" => PassOutcome::Incomplete,
            "Out" => PassOutcome::Out,
            "Pass Offside" => PassOutcome::Offside,
            "Unknown" => PassOutcome::Unknown,
            "Injury Clearance" => PassOutcome::InjuryClearance,
            other => PassOutcome::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PassOutcome::Incomplete => "Incomplete",
            PassOutcome::Out => "Out",
            PassOutcome::Offside => "Pass Offside",
            PassOutcome::Unknown => "Unknown",
            PassOutcome::InjuryClearance => "Injury Clearance",
            PassOutcome::Other(name) => name,
        }
    }
}

impl From<String> for PassOutcome {
    fn from(value: String) -> Self {
        PassOutcome::from_name(&value)
    }
}

impl From<PassOutcome> for String {
    fn from(value: PassOutcome) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Yellow,
    SecondYellow,
    Red,
    Other(String),
}

impl CardType {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Yellow Card" => CardType::Yellow,
            "Second Yellow" => CardType::SecondYellow,
            "Red Card" => CardType::Red,
            other => CardType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CardType::Yellow => "Yellow Card",
            CardType::SecondYellow => "Second Yellow",
            CardType::Red => "Red Card",
            CardType::Other(name) => name,
        }
    }
}

impl From<String> for CardType {
    fn from(value: String) -> Self {
        CardType::from_name(&value)
    }
}

impl From<CardType> for String {
    fn from(value: CardType) -> Self {
        value.as_str().to_string()
    }
}

/// One observed action during a match, in canonical shape.
///
/// `None` on an optional attribute means "not applicable", never "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub minute: u32,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_outcome: Option<ShotOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_outcome: Option<PassOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_assist: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
}

impl Event {
    pub fn new(
        event_id: impl Into<String>,
        minute: u32,
        event_type: EventType,
        team: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            minute,
            event_type,
            player: None,
            team: team.into(),
            shot_outcome: None,
            pass_outcome: None,
            pass_assist: None,
            card_type: None,
        }
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn with_shot_outcome(mut self, outcome: ShotOutcome) -> Self {
        self.shot_outcome = Some(outcome);
        self
    }

    pub fn with_pass_outcome(mut self, outcome: PassOutcome) -> Self {
        self.pass_outcome = Some(outcome);
        self
    }

    pub fn with_pass_assist(mut self, assist: bool) -> Self {
        self.pass_assist = Some(assist);
        self
    }

    pub fn with_card_type(mut self, card: CardType) -> Self {
        self.card_type = Some(card);
        self
    }

    pub fn is_by(&self, player_name: &str) -> bool {
        self.player.as_deref() == Some(player_name)
    }
}

/// All events of one match in feed order.
///
/// `card_field_present` records whether the feed's schema carried a card-type
/// attribute at all; some matches omit it entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEventSet {
    pub match_id: u64,
    pub events: Vec<Event>,
    pub card_field_present: bool,
}

impl MatchEventSet {
    /// Infers `card_field_present` from values: true only if some event has a
    /// card type. The normalizer counts a key with a null value as present, so
    /// sets built from raw feeds go through [`MatchEventSet::with_card_field`].
    pub fn new(match_id: u64, events: Vec<Event>) -> Self {
        let card_field_present = events.iter().any(|e| e.card_type.is_some());
        Self::with_card_field(match_id, events, card_field_present)
    }

    pub fn with_card_field(match_id: u64, events: Vec<Event>, card_field_present: bool) -> Self {
        Self {
            match_id,
            events,
            card_field_present,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn for_player<'a>(
        &'a self,
        player_name: &'a str,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.is_by(player_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names_round_trip() {
        for name in [
            "Pass",
            "Shot",
            "Card",
            "Tackle",
            "Interception",
            "Foul Committed",
            "Foul Won",
            "Ball Receipt*",
        ] {
            assert_eq!(EventType::from_name(name).as_str(), name);
        }
        assert_eq!(EventType::from_name("Foul Won"), EventType::FoulWon);
        assert_eq!(
            EventType::from_name("Carry"),
            EventType::Other("Carry".to_string())
        );
    }

    #[test]
    fn shot_outcome_on_target_is_distinct_from_saved() {
        assert_eq!(ShotOutcome::from_name("On Target"), ShotOutcome::OnTarget);
        assert_ne!(ShotOutcome::from_name("Saved"), ShotOutcome::OnTarget);
    }

    #[test]
    fn event_json_omits_absent_attributes() {
        let event = Event::new("e1", 12, EventType::Pass, "X").with_player("A");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Pass\""));
        assert!(!json.contains("pass_outcome"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn card_field_detected_from_events() {
        let plain = MatchEventSet::new(1, vec![Event::new("1", 3, EventType::Card, "X")]);
        assert!(!plain.card_field_present);

        let carded = MatchEventSet::new(
            1,
            vec![Event::new("1", 3, EventType::Card, "X").with_card_type(CardType::Yellow)],
        );
        assert!(carded.card_field_present);
    }

    #[test]
    fn explicit_card_field_overrides_inference() {
        let events = vec![Event::new("1", 3, EventType::Card, "X")];
        let set = MatchEventSet::with_card_field(1, events, true);
        assert!(set.card_field_present);
        assert_eq!(set.len(), 1);
    }
}
