use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};

use crate::error::EngineResult;
use crate::provider::MatchDataProvider;

pub const FAKE_HOME: &str = "Alpha FC";
pub const FAKE_AWAY: &str = "Omega United";
const SQUAD_SIZE: u32 = 11;
const POSITIONS: [&str; 11] = [
    "Goalkeeper",
    "Right Back",
    "Right Center Back",
    "Left Center Back",
    "Left Back",
    "Right Defensive Midfield",
    "Left Defensive Midfield",
    "Right Wing",
    "Center Attacking Midfield",
    "Left Wing",
    "Center Forward",
];

/// Deterministic synthetic feed for offline runs and benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticProvider {
    seed: u64,
}

impl SyntheticProvider {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MatchDataProvider for SyntheticProvider {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String> {
        Ok(synthetic_events(match_id, self.seed))
    }

    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String> {
        Ok(synthetic_lineups(match_id))
    }
}

pub fn fake_player(team: &str, number: u32) -> String {
    format!("{team} #{number}")
}

/// A full match of provider-shaped event records. Same inputs, same output.
pub fn synthetic_events(match_id: u64, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed ^ match_id.rotate_left(17));
    let mut records: Vec<Value> = Vec::new();
    let push = |records: &mut Vec<Value>, mut record: Value| {
        let index = records.len() as u64 + 1;
        record["index"] = json!(index);
        record["id"] = json!(format!("{match_id}-{index}"));
        records.push(record);
    };

    for minute in 0..=90u32 {
        let actions = rng.gen_range(2..6);
        for _ in 0..actions {
            let home = rng.gen_bool(0.5);
            let (team, other) = if home {
                (FAKE_HOME, FAKE_AWAY)
            } else {
                (FAKE_AWAY, FAKE_HOME)
            };
            let number = rng.gen_range(1..=SQUAD_SIZE);
            let player = fake_player(team, number);
            let roll = rng.gen_range(0..100);

            match roll {
                0..=59 => {
                    let mut record = base(minute, "Pass", team, &player);
                    if rng.gen_bool(0.2) {
                        record["pass_outcome"] = json!("Incomplete");
                    }
                    push(&mut records, record);
                }
                60..=67 => {
                    let outcome = match rng.gen_range(0..100) {
                        0..=11 => "Goal",
                        12..=36 => "On Target",
                        37..=55 => "Saved",
                        56..=75 => "Blocked",
                        _ => "Off T",
                    };
                    if outcome == "Goal" {
                        let mut passer = rng.gen_range(1..=SQUAD_SIZE);
                        if passer == number {
                            passer = passer % SQUAD_SIZE + 1;
                        }
                        let mut assist = base(minute, "Pass", team, &fake_player(team, passer));
                        assist["pass_assist"] = json!(true);
                        push(&mut records, assist);
                    }
                    let mut shot = base(minute, "Shot", team, &player);
                    shot["shot_outcome"] = json!(outcome);
                    push(&mut records, shot);
                }
                68..=75 => push(&mut records, base(minute, "Tackle", team, &player)),
                76..=81 => push(&mut records, base(minute, "Interception", team, &player)),
                82..=85 => {
                    push(&mut records, base(minute, "Foul Committed", team, &player));
                    let victim = fake_player(other, rng.gen_range(1..=SQUAD_SIZE));
                    push(&mut records, base(minute, "Foul Won", other, &victim));
                    if rng.gen_bool(0.25) {
                        let mut card = base(minute, "Card", team, &player);
                        let card_type = if rng.gen_bool(0.9) { "Yellow Card" } else { "Red Card" };
                        card["card_type"] = json!(card_type);
                        push(&mut records, card);
                    }
                }
                _ => push(&mut records, base(minute, "Carry", team, &player)),
            }
        }
    }

    Value::Array(records).to_string()
}

pub fn synthetic_lineups(_match_id: u64) -> String {
    let teams: Vec<Value> = [FAKE_HOME, FAKE_AWAY]
        .iter()
        .map(|team| {
            let lineup: Vec<Value> = (1..=SQUAD_SIZE + 3)
                .rev()
                .map(|number| {
                    let positions = if number <= SQUAD_SIZE {
                        json!([{
                            "position": POSITIONS[(number - 1) as usize],
                            "from": "00:00",
                            "start_reason": "Starting XI",
                            "end_reason": "Final Whistle",
                        }])
                    } else {
                        json!([])
                    };
                    json!({
                        "player_name": fake_player(team, number),
                        "jersey_number": number,
                        "positions": positions,
                        "cards": [],
                    })
                })
                .collect();
            json!({ "team_name": team, "lineup": lineup })
        })
        .collect();
    Value::Array(teams).to_string()
}

fn base(minute: u32, event_type: &str, team: &str, player: &str) -> Value {
    json!({
        "minute": minute,
        "type": event_type,
        "team": team,
        "player": player,
    })
}
