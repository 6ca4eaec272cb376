use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::event::CardType;
use crate::normalize::{is_missing, replace_non_finite_literals};

const STARTING_XI: &str = "Starting XI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupPosition {
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupCard {
    pub card_type: CardType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub positions: Vec<LineupPosition>,
    #[serde(default)]
    pub cards: Vec<LineupCard>,
}

impl LineupPlayer {
    pub fn started(&self) -> bool {
        self.positions
            .first()
            .and_then(|p| p.start_reason.as_deref())
            == Some(STARTING_XI)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLineup {
    pub team: String,
    pub players: Vec<LineupPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingPlayer {
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingXi {
    pub team: String,
    pub players: Vec<StartingPlayer>,
}

/// Parse a lineup payload.
///
/// Two layouts are accepted: an array of `{team_name, lineup: [...]}` objects,
/// or an object mapping team name to its player list. Player `positions` and
/// `cards` may be bare arrays or wrapped as `{"positions": [...]}`.
pub fn parse_lineups_json(raw: &str) -> EngineResult<Vec<TeamLineup>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let cleaned = replace_non_finite_literals(trimmed);
    let root: Value = serde_json::from_str(&cleaned)
        .map_err(|err| EngineError::data_format(format!("invalid lineups json: {err}")))?;

    match root {
        Value::Array(teams) => teams
            .iter()
            .enumerate()
            .map(|(idx, team)| -> EngineResult<TeamLineup> {
                let name = team
                    .get("team_name")
                    .or_else(|| team.get("team"))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        EngineError::data_format(format!("lineup entry {idx} has no team name"))
                    })?;
                let players = team.get("lineup").or_else(|| team.get("players"));
                Ok(TeamLineup {
                    team: name.to_string(),
                    players: parse_players(players),
                })
            })
            .collect(),
        Value::Object(map) => Ok(map
            .iter()
            .map(|(team, players)| TeamLineup {
                team: team.clone(),
                players: parse_players(Some(players)),
            })
            .collect()),
        _ => Err(EngineError::data_format(
            "lineups payload is neither an array nor an object",
        )),
    }
}

/// Starters per team, ordered by shirt number. Teams keep payload order.
pub fn starting_xi(lineups: &[TeamLineup]) -> Vec<StartingXi> {
    lineups
        .iter()
        .map(|team| {
            let mut starters: Vec<&LineupPlayer> =
                team.players.iter().filter(|p| p.started()).collect();
            starters.sort_by_key(|p| p.jersey_number.unwrap_or(u32::MAX));
            StartingXi {
                team: team.team.clone(),
                players: starters
                    .into_iter()
                    .map(|p| StartingPlayer {
                        player: p.player_name.clone(),
                        position: p.positions.first().map(|pos| pos.position.clone()),
                        jersey_number: p.jersey_number,
                    })
                    .collect(),
            }
        })
        .collect()
}

fn parse_players(value: Option<&Value>) -> Vec<LineupPlayer> {
    let Some(list) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter().filter_map(parse_player).collect()
}

fn parse_player(value: &Value) -> Option<LineupPlayer> {
    let player_name = text(value.get("player_name").or_else(|| value.get("name")))?;
    let jersey_number = value.get("jersey_number").and_then(|v| match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    });

    Some(LineupPlayer {
        player_name,
        nickname: text(value.get("player_nickname")),
        jersey_number,
        positions: unwrap_list(value.get("positions"), "positions")
            .iter()
            .filter_map(parse_position)
            .collect(),
        cards: unwrap_list(value.get("cards"), "cards")
            .iter()
            .filter_map(parse_card)
            .collect(),
    })
}

fn parse_position(value: &Value) -> Option<LineupPosition> {
    Some(LineupPosition {
        position: text(value.get("position"))?,
        start_reason: text(value.get("start_reason")),
        end_reason: text(value.get("end_reason")),
        from: text(value.get("from")),
        to: text(value.get("to")),
    })
}

fn parse_card(value: &Value) -> Option<LineupCard> {
    let card_type = text(value.get("card_type"))?;
    Some(LineupCard {
        card_type: CardType::from_name(&card_type),
        time: text(value.get("time")),
        reason: text(value.get("reason")),
    })
}

fn unwrap_list<'a>(value: Option<&'a Value>, wrapper: &str) -> &'a [Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Object(map)) => map
            .get(wrapper)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| !is_missing(v))?;
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string()),
        _ => None,
    }
}
