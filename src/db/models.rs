use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

/// Row of the `auth` table. Both columns are nullable in practice since the
/// schema is owned outside this service.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbCredential {
    pub email: Option<String>,
    pub pass: Option<String>,
}

/// One `acessos` row, column name to JSON value, in column order of the query.
pub type AccessRow = Map<String, Value>;

/// Full result of the `acessos` read, returned to clients as-is.
#[derive(Debug, Clone, Serialize)]
pub struct AccessQueryResult {
    pub success: bool,
    pub meta: QueryMeta,
    pub results: Vec<AccessRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryMeta {
    /// Wall-clock time spent in the query, in milliseconds.
    pub duration: f64,
    pub rows_read: u64,
}
