use thiserror::Error;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Failure classes surfaced by the aggregation engine.
///
/// The engine never partially succeeds: an operation either yields its full
/// derived structure or exactly one of these.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The upstream source could not be reached or rejected the request.
    #[error("failed to fetch match {match_id} from upstream: {reason}")]
    UpstreamFetch { match_id: u64, reason: String },

    /// Data was retrieved but does not have a recognizable event shape.
    #[error("malformed match data: {0}")]
    DataFormat(String),

    /// No events were recorded for the player in this match.
    ///
    /// `match_had_events` is false when the whole match was empty. Both cases
    /// share this variant; callers that care can inspect the flag.
    #[error("no events found for player '{player}' in match {match_id}")]
    PlayerNotFound {
        match_id: u64,
        player: String,
        match_had_events: bool,
    },
}

impl EngineError {
    pub fn upstream<S: Into<String>>(match_id: u64, reason: S) -> Self {
        EngineError::UpstreamFetch {
            match_id,
            reason: reason.into(),
        }
    }

    pub fn data_format<S: Into<String>>(msg: S) -> Self {
        EngineError::DataFormat(msg.into())
    }

    /// Transient failures a caller may choose to retry. The engine never does.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::UpstreamFetch { .. })
    }

    /// Suggested status for HTTP collaborators.
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::UpstreamFetch { .. } => 502,
            EngineError::DataFormat(_) => 400,
            EngineError::PlayerNotFound { .. } => 404,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::UpstreamFetch { .. } => "upstream_fetch_error",
            EngineError::DataFormat(_) => "data_format_error",
            EngineError::PlayerNotFound { .. } => "player_not_found",
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::DataFormat(err.to_string())
    }
}
