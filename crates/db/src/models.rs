//! Row structs that map 1-to-1 onto database tables.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// category
// ---------------------------------------------------------------------------

/// A persisted category row.
///
/// `id` is assigned by the database on insert; any value set by the caller
/// before [`create`](crate::CategoryRepository::create) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// A category that has not been inserted yet.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self { id: 0, name: name.into() }
    }
}
