use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::EngineResult;
use crate::event::MatchEventSet;

/// Caller-owned store of normalized matches.
///
/// The engine keeps no cache of its own. A collaborator that wants to avoid
/// refetching the same match across several requests creates one of these and
/// passes it to the engine entry points. Entries are immutable once stored.
/// Concurrent misses for the same match may both fetch; the first insert wins.
#[derive(Debug, Default)]
pub struct EventCache {
    entries: Mutex<HashMap<u64, Arc<MatchEventSet>>>,
}

impl EventCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, match_id: u64) -> Option<Arc<MatchEventSet>> {
        self.lock().get(&match_id).cloned()
    }

    pub fn insert(&self, set: MatchEventSet) -> Arc<MatchEventSet> {
        let match_id = set.match_id;
        self.lock()
            .entry(match_id)
            .or_insert_with(|| Arc::new(set))
            .clone()
    }

    /// Return the cached set or load it. The lock is not held while loading,
    /// so unrelated matches never wait on each other.
    pub fn get_or_try_load<F>(&self, match_id: u64, load: F) -> EngineResult<Arc<MatchEventSet>>
    where
        F: FnOnce() -> EngineResult<MatchEventSet>,
    {
        if let Some(hit) = self.get(match_id) {
            return Ok(hit);
        }
        let set = load()?;
        Ok(self.insert(set))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Arc<MatchEventSet>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
