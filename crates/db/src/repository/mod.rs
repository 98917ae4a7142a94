//! Repository — one method per database operation on the `category` table.
//!
//! Every method takes the `&mut SqliteConnection` of an already-open
//! transaction and returns a `Result<T, DbError>`.  Repositories never open
//! or settle a transaction themselves.  No business logic — pure SQL.
//!
//! Queries use the runtime-checked `sqlx::query`/`query_as` rather than the
//! `query!` macros, so the crate builds without `DATABASE_URL` or a `.sqlx`
//! offline cache.

pub mod categories;

pub use categories::{CategoryRepository, SqlCategoryRepository};
