use crate::config::Config;
use crate::db::models::DbClient;
use crate::db::schema::SQLITE_INIT;
use crate::error::CounterError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `cfg.database_url`, creating the database file (and its
/// directory) when missing.
pub async fn connect(cfg: &Config) -> Result<SqlitePool, CounterError> {
    let connect_opts = SqliteConnectOptions::from_str(cfg.database_url.as_str())?
        .create_if_missing(true)
        .foreign_keys(true);

    if let Some(parent) = connect_opts.get_filename().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(connect_opts)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct CounterStorage {
    pool: SqlitePool,
}

impl CounterStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CounterError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list_clients(&self) -> Result<Vec<DbClient>, CounterError> {
        let rows = sqlx::query_as::<_, DbClient>("SELECT id, name FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Stored `api_calls` for `client_id`, or `None` when the client has no counter.
    pub async fn api_calls(&self, client_id: i64) -> Result<Option<i64>, CounterError> {
        let rec: Option<(i64,)> =
            sqlx::query_as("SELECT api_calls FROM requests WHERE client_id = ?")
                .bind(client_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(rec.map(|r| r.0))
    }

    /// Single-statement `api_calls + 1`; returns the number of rows touched (0 or 1).
    pub async fn increment(&self, client_id: i64) -> Result<u64, CounterError> {
        let res = sqlx::query("UPDATE requests SET api_calls = api_calls + 1 WHERE client_id = ?")
            .bind(client_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    /// Insert each client and its counter in one transaction. Counters reference
    /// the ids the store assigns. Returns those ids, in input order.
    pub async fn insert_seed(&self, clients: &[(&str, i64)]) -> Result<Vec<i64>, CounterError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(clients.len());

        for (name, api_calls) in clients {
            let client_id = sqlx::query("INSERT INTO clients (name) VALUES (?)")
                .bind(*name)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();

            sqlx::query("INSERT INTO requests (client_id, api_calls) VALUES (?, ?)")
                .bind(client_id)
                .bind(api_calls)
                .execute(&mut *tx)
                .await?;
            ids.push(client_id);
        }

        tx.commit().await?;
        Ok(ids)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
