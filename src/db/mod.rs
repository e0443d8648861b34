//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pooled storage with one method per statement

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::DbClient;
pub use schema::SQLITE_INIT;
pub use sqlite::{CounterStorage, SqlitePool, connect};
