//! `db` crate — pure persistence layer.
//!
//! Provides the SQLite connection pool, the `category` row struct, the
//! repository that reads and writes it, and the transaction guard every use
//! case runs inside.  No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;
pub mod transaction;

pub use pool::DbPool;
pub use error::DbError;
pub use models::Category;
pub use repository::{CategoryRepository, SqlCategoryRepository};
pub use transaction::{TxGuard, TxMode};

/// Connection type borrowed from an open transaction by repository calls.
pub use sqlx::SqliteConnection;
