use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};
use crate::event::{CardType, Event, EventType, MatchEventSet, PassOutcome, ShotOutcome};

const CARD_KEYS: &[&str] = &["card_type", "bad_behaviour_card", "foul_committed_card"];

/// Parse a raw event payload into a canonical `MatchEventSet`.
///
/// Accepts a JSON array of records, an object holding an `events` array, an
/// object of per-type record arrays (the split form), or any of those
/// double-encoded as a JSON string. Bare `NaN`/`Infinity` literals are read as
/// missing values. An empty body or `null` is a match with no events.
pub fn parse_events_json(match_id: u64, raw: &str) -> EngineResult<MatchEventSet> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(MatchEventSet::new(match_id, Vec::new()));
    }

    let cleaned = replace_non_finite_literals(trimmed);
    let root: Value = serde_json::from_str(&cleaned)
        .map_err(|err| EngineError::data_format(format!("invalid events json: {err}")))?;
    normalize_value(match_id, root)
}

pub fn normalize_value(match_id: u64, root: Value) -> EngineResult<MatchEventSet> {
    let root = match root {
        Value::String(inner) => {
            let cleaned = replace_non_finite_literals(inner.trim());
            serde_json::from_str(&cleaned).map_err(|err| {
                EngineError::data_format(format!("invalid embedded events json: {err}"))
            })?
        }
        other => other,
    };

    let mut records = collect_records(root)?;
    order_by_feed_index(&mut records);

    let card_field_present = records.iter().any(|record| {
        CARD_KEYS.iter().any(|key| record.contains_key(*key)) || has_nested_card(record)
    });

    let mut events = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        events.push(normalize_record(idx, record)?);
    }

    Ok(MatchEventSet::with_card_field(
        match_id,
        events,
        card_field_present,
    ))
}

fn collect_records(root: Value) -> EngineResult<Vec<Map<String, Value>>> {
    let items = match root {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if let Some(events) = map.remove("events") {
                match events {
                    Value::Array(items) => items,
                    Value::Null => Vec::new(),
                    _ => return Err(EngineError::data_format("`events` is not an array")),
                }
            } else if !map.is_empty() && map.values().all(|v| v.is_array()) {
                map.into_iter()
                    .flat_map(|(_, v)| match v {
                        Value::Array(items) => items,
                        _ => Vec::new(),
                    })
                    .collect()
            } else {
                return Err(EngineError::data_format(
                    "object payload has neither an events array nor per-type record arrays",
                ));
            }
        }
        other => {
            return Err(EngineError::data_format(format!(
                "expected event records, found {}",
                value_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(EngineError::data_format(format!(
                "event record {idx} is {}, expected an object",
                value_kind(&other)
            ))),
        })
        .collect()
}

// Split payloads lose feed order when concatenated; the provider's sequence
// number restores it. Stable, and skipped unless every record carries one.
fn order_by_feed_index(records: &mut [Map<String, Value>]) {
    let all_indexed = records
        .iter()
        .all(|r| r.get("index").and_then(Value::as_u64).is_some());
    if all_indexed && !records.is_empty() {
        records.sort_by_key(|r| r.get("index").and_then(Value::as_u64).unwrap_or(u64::MAX));
    }
}

fn normalize_record(idx: usize, record: &Map<String, Value>) -> EngineResult<Event> {
    let event_id = pick_id(record, &["event_id", "id"]).unwrap_or_else(|| idx.to_string());

    let minute = match present(record, "minute") {
        Some(value) => parse_minute(value).ok_or_else(|| {
            EngineError::data_format(format!("event {event_id}: invalid minute {value}"))
        })?,
        None => {
            return Err(EngineError::data_format(format!(
                "event {event_id}: missing minute"
            )));
        }
    };

    let type_name = pick_name(record, &["type", "event_type"]).ok_or_else(|| {
        EngineError::data_format(format!("event {event_id}: missing type"))
    })?;

    let team = pick_name(record, &["team", "team_name"]).ok_or_else(|| {
        EngineError::data_format(format!("event {event_id}: missing team"))
    })?;

    let player = pick_name(record, &["player", "player_name"]);

    let shot_outcome = pick_name(record, &["shot_outcome"])
        .or_else(|| nested_name(record, "shot", "outcome"))
        .map(|name| ShotOutcome::from_name(&name));

    let pass_outcome = pick_name(record, &["pass_outcome"])
        .or_else(|| nested_name(record, "pass", "outcome"))
        .map(|name| PassOutcome::from_name(&name));

    let pass_assist = pick_bool(record, &["pass_assist", "pass_goal_assist"]).or_else(|| {
        present(record, "pass")
            .and_then(|pass| pass.get("goal_assist"))
            .and_then(as_bool)
    });

    let card_type = pick_name(record, CARD_KEYS)
        .or_else(|| nested_name(record, "bad_behaviour", "card"))
        .or_else(|| nested_name(record, "foul_committed", "card"))
        .map(|name| CardType::from_name(&name));

    Ok(Event {
        event_id,
        minute,
        event_type: EventType::from_name(&type_name),
        player,
        team,
        shot_outcome,
        pass_outcome,
        pass_assist,
        card_type,
    })
}

/// True for values the upstream uses to mean "no value here".
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let t = s.trim();
            t.is_empty() || t.eq_ignore_ascii_case("nan") || t.eq_ignore_ascii_case("none")
        }
        Value::Number(n) => n.as_f64().is_some_and(|f| !f.is_finite()),
        _ => false,
    }
}

fn present<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !is_missing(v))
}

fn parse_minute(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(m) = n.as_u64() {
                return u32::try_from(m).ok();
            }
            let f = n.as_f64()?;
            if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
                Some(f as u32)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn pick_id(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        match present(record, key) {
            Some(Value::String(s)) => return Some(s.trim().to_string()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn pick_name(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(name) = present(record, key).and_then(as_name) {
            return Some(name);
        }
    }
    None
}

fn nested_name(record: &Map<String, Value>, outer: &str, inner: &str) -> Option<String> {
    present(record, outer)?
        .get(inner)
        .filter(|v| !is_missing(v))
        .and_then(as_name)
}

fn has_nested_card(record: &Map<String, Value>) -> bool {
    ["bad_behaviour", "foul_committed"]
        .iter()
        .any(|outer| record.get(*outer).and_then(|v| v.get("card")).is_some())
}

fn pick_bool(record: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    for key in keys {
        if let Some(flag) = present(record, key).and_then(as_bool) {
            return Some(flag);
        }
    }
    None
}

fn as_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Rewrite `NaN`, `Infinity` and `-Infinity` tokens outside of strings to `null`.
pub(crate) fn replace_non_finite_literals(raw: &str) -> String {
    const TOKENS: &[&str] = &["-Infinity", "Infinity", "NaN"];

    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = raw;

    while let Some(ch) = rest.chars().next() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if ch == '"' {
            in_string = true;
            out.push(ch);
            rest = &rest[1..];
            continue;
        }

        if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }

        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
