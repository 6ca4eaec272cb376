//! Event-aggregation engine for football match feeds.
//!
//! Raw provider events are normalized into [`event::MatchEventSet`], then either
//! filtered into a [`main_events::MainEventsSummary`] or scoped to one player
//! and aggregated into a [`player_profile::PlayerProfile`].

pub mod cache;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod fake_feed;
pub mod http_client;
pub mod lineups;
pub mod main_events;
pub mod normalize;
pub mod player_profile;
pub mod provider;
pub mod serialize;

pub use cache::EventCache;
pub use error::{EngineError, EngineResult};
pub use event::{Event, EventType, MatchEventSet};
pub use main_events::{MainEventsSummary, filter_main_events};
pub use player_profile::{PlayerProfile, PlayerStatsReport, aggregate_player_profile};
pub use provider::MatchDataProvider;
