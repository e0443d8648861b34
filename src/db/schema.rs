//! SQL DDL for the clients/requests store.

/// SQLite schema with:
/// - `clients.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `clients.name` UNIQUE, so re-running the seed fails instead of duplicating
/// - `requests.client_id` UNIQUE, so each client owns at most one counter
/// - `requests.api_calls` never negative
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS requests (
    client_id INTEGER NOT NULL UNIQUE REFERENCES clients(id),
    api_calls INTEGER NOT NULL DEFAULT 0 CHECK (api_calls >= 0)
);
"#;
