//! Database access: the `auth` credential table and the read-only `acessos` table.
//!
//! Layout:
//! - `models.rs`: row structs and the pass-through result of the `acessos` read
//! - `sqlite.rs`: pool setup and the three queries the handlers issue

pub mod models;
pub mod sqlite;

pub use models::{AccessQueryResult, AccessRow, DbCredential, QueryMeta};
pub use sqlite::{AuthStore, SqlitePool, connect};
