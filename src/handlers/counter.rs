use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::db::DbClient;
use crate::service::counter::{self, IncrementAck, RawClientId};
use crate::{CounterError, router::CounterState};

type ClientIdPath = Result<Path<String>, PathRejection>;

/// GET /clients
pub async fn list_clients_handler(
    State(state): State<CounterState>,
) -> Result<Json<Vec<DbClient>>, CounterError> {
    Ok(Json(counter::list_clients(&state.storage).await?))
}

/// GET /requests/{client_id} -> `{"api_calls": n}`, or `{}` when no counter matches.
pub async fn get_request_count_handler(
    State(state): State<CounterState>,
    path: ClientIdPath,
) -> Result<Response, CounterError> {
    read_count(&state, raw_client_id(&path)).await
}

/// POST /requests/{client_id}
pub async fn increment_request_count_handler(
    State(state): State<CounterState>,
    path: ClientIdPath,
) -> Result<Json<IncrementAck>, CounterError> {
    let ack = counter::increment_request_count(&state.storage, raw_client_id(&path)).await?;
    Ok(Json(ack))
}

/// GET /requests and /requests/: the path parameter is absent.
pub async fn get_request_count_missing_handler(
    State(state): State<CounterState>,
) -> Result<Response, CounterError> {
    read_count(&state, RawClientId::Absent).await
}

/// POST /requests and /requests/: the path parameter is absent.
pub async fn increment_request_count_missing_handler(
    State(state): State<CounterState>,
) -> Result<Json<IncrementAck>, CounterError> {
    let ack = counter::increment_request_count(&state.storage, RawClientId::Absent).await?;
    Ok(Json(ack))
}

fn raw_client_id(path: &ClientIdPath) -> RawClientId<'_> {
    match path {
        Ok(Path(client_id)) => RawClientId::Text(client_id),
        Err(PathRejection::MissingPathParams(_)) => RawClientId::Absent,
        Err(rejection) => {
            debug!(%rejection, "client_id path segment could not be decoded");
            RawClientId::Undecodable
        }
    }
}

async fn read_count(
    state: &CounterState,
    client_id: RawClientId<'_>,
) -> Result<Response, CounterError> {
    let count = counter::get_request_count(&state.storage, client_id).await?;
    Ok(match count {
        Some(count) => Json(count).into_response(),
        None => Json(json!({})).into_response(),
    })
}
