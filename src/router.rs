use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::db::CounterStorage;
use crate::error::CounterError;
use crate::handlers::counter::{
    get_request_count_handler, get_request_count_missing_handler,
    increment_request_count_handler, increment_request_count_missing_handler,
    list_clients_handler,
};

/// Shared per-process state; cloning only clones the pool handle.
#[derive(Clone)]
pub struct CounterState {
    pub storage: CounterStorage,
}

impl CounterState {
    pub fn new(storage: CounterStorage) -> Self {
        Self { storage }
    }
}

pub fn counter_router(state: CounterState) -> Router {
    Router::new()
        .route("/clients", get(list_clients_handler))
        .route(
            "/requests",
            get(get_request_count_missing_handler).post(increment_request_count_missing_handler),
        )
        .route(
            "/requests/",
            get(get_request_count_missing_handler).post(increment_request_count_missing_handler),
        )
        .route(
            "/requests/{client_id}",
            get(get_request_count_handler).post(increment_request_count_handler),
        )
        .with_state(state)
}

/// Serve `counter_router` until `shutdown` resolves. The pool is closed on every
/// exit path, including a failed `serve`.
pub async fn serve<F>(
    listener: TcpListener,
    storage: CounterStorage,
    shutdown: F,
) -> Result<(), CounterError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = counter_router(CounterState::new(storage.clone()));
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    storage.close().await;
    served?;
    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C. If the handler cannot be installed, logs it and never
/// resolves, so the server keeps running.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
