use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};

use crate::fake_feed::SyntheticProvider;
use crate::http_client::REQUEST_TIMEOUT_SECS;
use crate::provider::{FileProvider, HttpProvider, MatchDataProvider, OPEN_DATA_BASE_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    File,
    Fake,
}

impl SourceKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "http" | "remote" => Some(SourceKind::Http),
            "file" | "local" => Some(SourceKind::File),
            "fake" | "synthetic" => Some(SourceKind::Fake),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceKind,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub timeout: Duration,
    pub parallelism: usize,
    pub fake_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::Http,
            base_url: OPEN_DATA_BASE_URL.to_string(),
            data_dir: PathBuf::from("data"),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            parallelism: default_parallelism(),
            fake_seed: 7,
        }
    }
}

impl Config {
    /// Read `MATCHSTATS_*` variables, loading `.env.local` then `.env` first.
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let source = match lookup("MATCHSTATS_SOURCE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => SourceKind::parse(&raw).ok_or_else(|| {
                anyhow!("unknown MATCHSTATS_SOURCE '{raw}' (expected http, file or fake)")
            })?,
            None => defaults.source,
        };
        let base_url = lookup("MATCHSTATS_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);
        let data_dir = lookup("MATCHSTATS_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let timeout_secs = lookup("MATCHSTATS_TIMEOUT_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(REQUEST_TIMEOUT_SECS)
            .clamp(1, 120);
        let parallelism = lookup("MATCHSTATS_PARALLELISM")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(defaults.parallelism)
            .clamp(1, 32);
        let fake_seed = lookup("MATCHSTATS_FAKE_SEED")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(defaults.fake_seed);

        Ok(Self {
            source,
            base_url,
            data_dir,
            timeout: Duration::from_secs(timeout_secs),
            parallelism,
            fake_seed,
        })
    }

    pub fn build_provider(&self) -> Result<Box<dyn MatchDataProvider>> {
        let provider: Box<dyn MatchDataProvider> = match self.source {
            SourceKind::Http => Box::new(HttpProvider::with_timeout(&self.base_url, self.timeout)?),
            SourceKind::File => Box::new(FileProvider::new(self.data_dir.clone())),
            SourceKind::Fake => Box::new(SyntheticProvider::new(self.fake_seed)),
        };
        Ok(provider)
    }
}

fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .clamp(1, 32)
}
