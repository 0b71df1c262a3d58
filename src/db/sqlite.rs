use crate::db::models::{AccessQueryResult, AccessRow, DbCredential, QueryMeta};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Pool, Row, Sqlite, TypeInfo, ValueRef};
use std::str::FromStr;
use std::time::Instant;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url`. The `auth` and `acessos` tables are expected
/// to exist already; nothing here creates or alters them.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new().connect_with(connect_opts).await
}

#[derive(Clone)]
pub struct AuthStore {
    pool: SqlitePool,
}

impl AuthStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Plain insert; duplicate emails are only rejected if the schema says so.
    pub async fn insert_credential(&self, email: &str, pass: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO auth (email, pass) VALUES (?, ?)")
            .bind(email)
            .bind(pass)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// First row with an exactly matching email, if any.
    pub async fn find_credential(&self, email: &str) -> Result<Option<DbCredential>, sqlx::Error> {
        sqlx::query_as::<_, DbCredential>("SELECT * FROM auth WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Unfiltered read of `acessos`, rows passed through column by column.
    pub async fn list_accesses(&self) -> Result<AccessQueryResult, sqlx::Error> {
        let started = Instant::now();
        let rows = sqlx::query("SELECT * FROM acessos")
            .fetch_all(&self.pool)
            .await?;
        let duration = started.elapsed().as_secs_f64() * 1000.0;

        let results = rows
            .iter()
            .map(Self::row_to_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AccessQueryResult {
            success: true,
            meta: QueryMeta {
                duration,
                rows_read: results.len() as u64,
            },
            results,
        })
    }

    /// Decode by the value's storage class rather than the declared column type,
    /// since SQLite lets any column hold any class.
    fn row_to_json(row: &SqliteRow) -> Result<AccessRow, sqlx::Error> {
        let mut out = AccessRow::new();
        for column in row.columns() {
            let idx = column.ordinal();
            let raw = row.try_get_raw(idx)?;
            let value = if raw.is_null() {
                Value::Null
            } else {
                let class = raw.type_info().name().to_string();
                match class.as_str() {
                    "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(idx)?),
                    "REAL" => Value::from(row.try_get_unchecked::<f64, _>(idx)?),
                    "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(idx)?),
                    _ => Value::from(row.try_get_unchecked::<String, _>(idx)?),
                }
            };
            out.insert(column.name().to_string(), value);
        }
        Ok(out)
    }
}
