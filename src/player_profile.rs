use serde::{Deserialize, Serialize};

use crate::classify::{is_shot_on_target, is_successful_pass};
use crate::error::{EngineError, EngineResult};
use crate::event::{EventType, MatchEventSet};

/// Per-player counters for one match.
///
/// `minutes_played` is the minute of the player's last recorded event. A player
/// substituted off after their final touch reports that touch's minute, not the
/// withdrawal minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub match_id: u64,
    pub player_name: String,
    pub passes_completed: u32,
    pub passes_attempted: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub tackles: u32,
    pub interceptions: u32,
    pub fouls_committed: u32,
    pub fouls_won: u32,
    pub minutes_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    pub completed: u32,
    pub attempted: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotStats {
    pub total: u32,
    pub on_target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveStats {
    pub tackles: u32,
    pub interceptions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoulStats {
    pub committed: u32,
    pub won: u32,
}

/// Grouped view of a `PlayerProfile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatsReport {
    pub player_name: String,
    pub passes: PassStats,
    pub shots: ShotStats,
    pub defensive: DefensiveStats,
    pub fouls: FoulStats,
    pub minutes_played: u32,
}

impl From<&PlayerProfile> for PlayerStatsReport {
    fn from(profile: &PlayerProfile) -> Self {
        Self {
            player_name: profile.player_name.clone(),
            passes: PassStats {
                completed: profile.passes_completed,
                attempted: profile.passes_attempted,
            },
            shots: ShotStats {
                total: profile.shots,
                on_target: profile.shots_on_target,
            },
            defensive: DefensiveStats {
                tackles: profile.tackles,
                interceptions: profile.interceptions,
            },
            fouls: FoulStats {
                committed: profile.fouls_committed,
                won: profile.fouls_won,
            },
            minutes_played: profile.minutes_played,
        }
    }
}

pub fn aggregate_player_profile(
    set: &MatchEventSet,
    player_name: &str,
) -> EngineResult<PlayerProfile> {
    let mut profile = PlayerProfile {
        match_id: set.match_id,
        player_name: player_name.to_string(),
        passes_completed: 0,
        passes_attempted: 0,
        shots: 0,
        shots_on_target: 0,
        tackles: 0,
        interceptions: 0,
        fouls_committed: 0,
        fouls_won: 0,
        minutes_played: 0,
    };

    let mut seen = false;
    for event in set.for_player(player_name) {
        seen = true;
        profile.minutes_played = profile.minutes_played.max(event.minute);

        if is_successful_pass(event) {
            profile.passes_completed += 1;
        }
        if is_shot_on_target(event) {
            profile.shots_on_target += 1;
        }
        match event.event_type {
            EventType::Pass => profile.passes_attempted += 1,
            EventType::Shot => profile.shots += 1,
            EventType::Tackle => profile.tackles += 1,
            EventType::Interception => profile.interceptions += 1,
            EventType::FoulCommitted => profile.fouls_committed += 1,
            EventType::FoulWon => profile.fouls_won += 1,
            EventType::Card | EventType::Other(_) => {}
        }
    }

    if !seen {
        return Err(EngineError::PlayerNotFound {
            match_id: set.match_id,
            player: player_name.to_string(),
            match_had_events: !set.is_empty(),
        });
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, PassOutcome, ShotOutcome};

    #[test]
    fn pass_completion_uses_missing_outcome() {
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
        assert_eq!(profile.minutes_played, 20);
    }

    #[test]
    fn counters_ignore_other_players() {
        let set = MatchEventSet::new(
            1,
            vec![
                Event::new("1", 3, EventType::Shot, "X")
                    .with_player("A")
                    .with_shot_outcome(ShotOutcome::OnTarget),
                Event::new("2", 4, EventType::Shot, "X")
                    .with_player("A")
                    .with_shot_outcome(ShotOutcome::Goal),
                Event::new("3", 80, EventType::Tackle, "Y").with_player("B"),
                Event::new("4", 9, EventType::Interception, "X").with_player("A"),
                Event::new("5", 11, EventType::FoulWon, "X").with_player("A"),
            ],
        );
        let profile = aggregate_player_profile(&set, "A").unwrap();
        assert_eq!(profile.shots, 2);
        assert_eq!(profile.shots_on_target, 1);
        assert_eq!(profile.tackles, 0);
        assert_eq!(profile.interceptions, 1);
        assert_eq!(profile.fouls_won, 1);
        assert_eq!(profile.minutes_played, 11);
    }

    #[test]
    fn empty_match_reports_player_not_found() {
        let set = MatchEventSet::new(9, Vec::new());
        match aggregate_player_profile(&set, "A") {
            Err(EngineError::PlayerNotFound {
                match_id,
                match_had_events,
                ..
            }) => {
                assert_eq!(match_id, 9);
                assert!(!match_had_events);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn nested_report_mirrors_profile() {
        let set = MatchEventSet::new(
            1,
            vec![Event::new("1", 55, EventType::FoulCommitted, "X").with_player("A")],
        );
        let profile = aggregate_player_profile(&set, "A").unwrap();
        let report = PlayerStatsReport::from(&profile);
        assert_eq!(report.fouls.committed, 1);
        assert_eq!(report.minutes_played, 55);
        assert_eq!(report.player_name, "A");
    }
}
