use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use log::{debug, warn};
use reqwest::blocking::Client;

use crate::error::{EngineError, EngineResult};
use crate::http_client::{build_http_client, http_client};

pub const OPEN_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/statsbomb/open-data/master/data";

/// Upstream match-data source.
///
/// Implementations return the raw payload text; parsing is left to the
/// normalizer so that shape problems surface as `DataFormat`, while anything
/// preventing retrieval surfaces as `UpstreamFetch`. Implementations must not
/// retry.
pub trait MatchDataProvider: Send + Sync {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String>;
    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String>;
}

#[derive(Debug, Clone, Copy)]
enum Resource {
    Events,
    Lineups,
}

impl Resource {
    fn dir(self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Lineups => "lineups",
        }
    }
}

/// Fetches `{base_url}/events/{id}.json` and `{base_url}/lineups/{id}.json`.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_client(http_client()?.clone(), base_url))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(build_http_client(timeout)?, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch(&self, resource: Resource, match_id: u64) -> EngineResult<String> {
        let url = format!("{}/{}/{match_id}.json", self.base_url, resource.dir());
        debug!("fetching {url}");

        let resp = self.client.get(&url).send().map_err(|err| {
            warn!("request to {url} failed: {err}");
            EngineError::upstream(match_id, format!("request failed: {err}"))
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{url} returned http {status}");
            return Err(EngineError::upstream(match_id, format!("http {status}")));
        }

        let body = resp
            .text()
            .map_err(|err| EngineError::upstream(match_id, format!("failed reading body: {err}")))?;
        debug!("fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

impl MatchDataProvider for HttpProvider {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String> {
        self.fetch(Resource::Events, match_id)
    }

    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String> {
        self.fetch(Resource::Lineups, match_id)
    }
}

/// Reads the same layout from a local directory, e.g. a checkout of the open
/// data repository.
#[derive(Debug, Clone)]
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, resource: Resource, match_id: u64) -> EngineResult<String> {
        let path = self
            .root
            .join(resource.dir())
            .join(format!("{match_id}.json"));
        debug!("reading {}", path.display());
        fs::read_to_string(&path).map_err(|err| {
            warn!("failed to read {}: {err}", path.display());
            EngineError::upstream(match_id, format!("{}: {err}", path.display()))
        })
    }
}

impl MatchDataProvider for FileProvider {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String> {
        self.read(Resource::Events, match_id)
    }

    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String> {
        self.read(Resource::Lineups, match_id)
    }
}

/// In-memory payloads keyed by match id.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    events: HashMap<u64, String>,
    lineups: HashMap<u64, String>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, match_id: u64, raw: impl Into<String>) -> Self {
        self.events.insert(match_id, raw.into());
        self
    }

    pub fn with_lineups(mut self, match_id: u64, raw: impl Into<String>) -> Self {
        self.lineups.insert(match_id, raw.into());
        self
    }
}

impl MatchDataProvider for StaticProvider {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String> {
        self.events
            .get(&match_id)
            .cloned()
            .ok_or_else(|| EngineError::upstream(match_id, "no events for match"))
    }

    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String> {
        self.lineups
            .get(&match_id)
            .cloned()
            .ok_or_else(|| EngineError::upstream(match_id, "no lineups for match"))
    }
}

impl<P: MatchDataProvider + ?Sized> MatchDataProvider for &P {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String> {
        (**self).fetch_events(match_id)
    }

    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String> {
        (**self).fetch_lineups(match_id)
    }
}

impl<P: MatchDataProvider + ?Sized> MatchDataProvider for Box<P> {
    fn fetch_events(&self, match_id: u64) -> EngineResult<String> {
        (**self).fetch_events(match_id)
    }

    fn fetch_lineups(&self, match_id: u64) -> EngineResult<String> {
        (**self).fetch_lineups(match_id)
    }
}
