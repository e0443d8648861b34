use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CounterError {
    #[error("client_id is required")]
    MissingClientId,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CounterError {
    pub fn status(&self) -> StatusCode {
        match self {
            CounterError::MissingClientId => StatusCode::BAD_REQUEST,
            CounterError::Database(_) | CounterError::Config(_) | CounterError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CounterError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            CounterError::MissingClientId => self.to_string(),
            CounterError::Database(_) | CounterError::Config(_) | CounterError::Io(_) => {
                error!(error = %self, "request failed");
                "internal server error".to_string()
            }
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Error body shared by every failing route: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: CounterError) -> (StatusCode, String) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    #[tokio::test]
    async fn missing_client_id_maps_to_400() {
        let (status, body) = body_of(CounterError::MissingClientId).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"client_id is required"}"#);
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let (status, body) = body_of(CounterError::Database(SqlxError::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"internal server error"}"#);
    }
}
