use serde::Serialize;

use crate::error::EngineResult;
use crate::main_events::MainEventsSummary;
use crate::player_profile::PlayerProfile;

/// Canonical exchange representation handed to collaborators.
///
/// Fields keep their declared order and optional attributes that are absent
/// are left out rather than written as `null`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> EngineResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Two-space indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> EngineResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn main_events_from_json(raw: &str) -> EngineResult<MainEventsSummary> {
    Ok(serde_json::from_str(raw)?)
}

pub fn player_profile_from_json(raw: &str) -> EngineResult<PlayerProfile> {
    Ok(serde_json::from_str(raw)?)
}
