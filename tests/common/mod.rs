#![allow(dead_code)]

use api_counter::Config;
use api_counter::db::{self, CounterStorage, SqlitePool};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Unique, not-yet-existing SQLite file path under the temp dir.
pub fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "api-counter-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    path
}

pub fn database_url(path: &Path) -> String {
    format!("sqlite:{}", path.display())
}

/// A throwaway SQLite file with the schema applied.
pub struct TestDb {
    pub path: PathBuf,
    /// Raw pool for statements `CounterStorage` does not expose.
    pub pool: SqlitePool,
    pub storage: CounterStorage,
}

impl TestDb {
    pub async fn new(tag: &str) -> Self {
        let db = Self::open(temp_db_path(tag)).await;
        db.storage.init_schema().await.expect("failed to apply schema");
        db
    }

    /// Connect to `path` without touching its schema.
    pub async fn open(path: PathBuf) -> Self {
        let cfg = Config {
            database_url: database_url(&path),
            max_connections: 4,
            ..Config::default()
        };
        let pool = db::connect(&cfg).await.expect("failed to open test db");
        let storage = CounterStorage::new(pool.clone());
        Self {
            path,
            pool,
            storage,
        }
    }

    pub async fn seeded(tag: &str) -> Self {
        let db = Self::new(tag).await;
        api_counter::service::seeder::seed(&db.storage)
            .await
            .expect("failed to seed");
        db
    }

    pub async fn counter_rows(&self) -> i64 {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM requests")
            .fetch_one(&self.pool)
            .await
            .expect("count failed");
        n
    }

    pub async fn cleanup(self) {
        self.storage.close().await;
        remove_db_files(&self.path);
    }
}

pub fn remove_db_files(path: &Path) {
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let _ = fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = String::from_utf8(body.to_vec()).expect("response body was not utf-8");
    (status, body)
}
