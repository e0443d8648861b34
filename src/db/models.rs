use serde::Serialize;
use sqlx::FromRow;

/// Row of `clients`; serialized as-is in the list response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, FromRow)]
pub struct DbClient {
    pub id: i64,
    pub name: String,
}

