use std::sync::Arc;

use rayon::prelude::*;

use crate::cache::EventCache;
use crate::error::EngineResult;
use crate::event::MatchEventSet;
use crate::lineups::{StartingXi, TeamLineup, parse_lineups_json, starting_xi};
use crate::main_events::{MainEventsSummary, filter_main_events};
use crate::normalize::parse_events_json;
use crate::player_profile::{PlayerProfile, PlayerStatsReport, aggregate_player_profile};
use crate::provider::MatchDataProvider;

/// Fetch and normalize one match, going through `cache` when one is given.
pub fn load_match<P>(
    provider: &P,
    cache: Option<&EventCache>,
    match_id: u64,
) -> EngineResult<Arc<MatchEventSet>>
where
    P: MatchDataProvider + ?Sized,
{
    let load = || {
        let raw = provider.fetch_events(match_id)?;
        parse_events_json(match_id, &raw)
    };
    match cache {
        Some(cache) => cache.get_or_try_load(match_id, load),
        None => load().map(Arc::new),
    }
}

pub fn get_main_events<P>(
    provider: &P,
    cache: Option<&EventCache>,
    match_id: u64,
) -> EngineResult<MainEventsSummary>
where
    P: MatchDataProvider + ?Sized,
{
    let set = load_match(provider, cache, match_id)?;
    Ok(filter_main_events(&set))
}

pub fn get_player_profile<P>(
    provider: &P,
    cache: Option<&EventCache>,
    match_id: u64,
    player_name: &str,
) -> EngineResult<PlayerProfile>
where
    P: MatchDataProvider + ?Sized,
{
    let set = load_match(provider, cache, match_id)?;
    aggregate_player_profile(&set, player_name)
}

pub fn get_player_stats<P>(
    provider: &P,
    cache: Option<&EventCache>,
    match_id: u64,
    player_name: &str,
) -> EngineResult<PlayerStatsReport>
where
    P: MatchDataProvider + ?Sized,
{
    let profile = get_player_profile(provider, cache, match_id, player_name)?;
    Ok(PlayerStatsReport::from(&profile))
}

pub fn get_lineups<P>(provider: &P, match_id: u64) -> EngineResult<Vec<TeamLineup>>
where
    P: MatchDataProvider + ?Sized,
{
    let raw = provider.fetch_lineups(match_id)?;
    parse_lineups_json(&raw)
}

pub fn get_starting_xi<P>(provider: &P, match_id: u64) -> EngineResult<Vec<StartingXi>>
where
    P: MatchDataProvider + ?Sized,
{
    Ok(starting_xi(&get_lineups(provider, match_id)?))
}

/// Main events for several matches on a bounded worker pool.
///
/// Each match succeeds or fails on its own; results keep input order.
pub fn main_events_for_matches<P>(
    provider: &P,
    cache: Option<&EventCache>,
    match_ids: &[u64],
    parallelism: usize,
) -> Vec<(u64, EngineResult<MainEventsSummary>)>
where
    P: MatchDataProvider + ?Sized,
{
    let run = || {
        match_ids
            .par_iter()
            .map(|&id| (id, get_main_events(provider, cache, id)))
            .collect::<Vec<_>>()
    };
    match rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism.max(1))
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(_) => run(),
    }
}
