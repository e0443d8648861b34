use crate::db::CounterStorage;
use crate::error::CounterError;
use tracing::info;

/// `(client name, initial api_calls)` for every seeded client.
pub const SEED_ROWS: [(&str, i64); 2] = [("Client A", 0), ("Client B", 0)];

/// Insert the fixed test rows in one transaction. Each counter references the id
/// the store assigned to its client.
///
/// Not idempotent: on a second run the `UNIQUE(name)` constraint rejects the
/// clients and the whole transaction rolls back.
pub async fn seed(storage: &CounterStorage) -> Result<Vec<i64>, CounterError> {
    let ids = storage.insert_seed(&SEED_ROWS).await?;
    info!(clients = ?ids, "seeded database");
    Ok(ids)
}
