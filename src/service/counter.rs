use crate::db::{CounterStorage, DbClient};
use crate::error::CounterError;
use serde::Serialize;
use tracing::{debug, warn};

/// Body of a successful counter read.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RequestCount {
    pub api_calls: i64,
}

/// Fixed confirmation returned by every accepted increment.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct IncrementAck {
    pub message: &'static str,
}

impl IncrementAck {
    pub const INCREMENTED: IncrementAck = IncrementAck {
        message: "Incremented",
    };
}

/// `client_id` as it arrived in the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawClientId<'a> {
    /// The route carries no `client_id` segment.
    Absent,
    Text(&'a str),
    /// The segment exists but is not valid percent-encoded UTF-8.
    Undecodable,
}

/// Absent or blank is `MissingClientId`.
/// A present id that is not an `i64` can match no row, so it maps to `Ok(None)`.
pub fn parse_client_id(raw: RawClientId<'_>) -> Result<Option<i64>, CounterError> {
    let text = match raw {
        RawClientId::Absent => return Err(CounterError::MissingClientId),
        RawClientId::Undecodable => return Ok(None),
        RawClientId::Text(text) => text.trim(),
    };
    if text.is_empty() {
        return Err(CounterError::MissingClientId);
    }
    Ok(text.parse::<i64>().ok())
}

pub async fn list_clients(storage: &CounterStorage) -> Result<Vec<DbClient>, CounterError> {
    let clients = storage.list_clients().await?;
    debug!(count = clients.len(), "listed clients");
    Ok(clients)
}

/// `Ok(None)` means no counter row matches; callers answer with `{}`.
pub async fn get_request_count(
    storage: &CounterStorage,
    client_id: RawClientId<'_>,
) -> Result<Option<RequestCount>, CounterError> {
    let Some(client_id) = parse_client_id(client_id)? else {
        debug!(?client_id, "client_id is not an integer; no counter can match");
        return Ok(None);
    };
    let api_calls = storage.api_calls(client_id).await?;
    debug!(client_id, ?api_calls, "read request count");
    Ok(api_calls.map(|api_calls| RequestCount { api_calls }))
}

pub async fn increment_request_count(
    storage: &CounterStorage,
    client_id: RawClientId<'_>,
) -> Result<IncrementAck, CounterError> {
    let Some(id) = parse_client_id(client_id)? else {
        warn!(?client_id, "increment skipped; client_id is not an integer");
        return Ok(IncrementAck::INCREMENTED);
    };
    let touched = storage.increment(id).await?;
    if touched == 0 {
        warn!(client_id = id, "increment matched no counter row");
    } else {
        debug!(client_id = id, "incremented request count");
    }
    Ok(IncrementAck::INCREMENTED)
}
