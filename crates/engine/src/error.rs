//! Use-case error types.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Diagnostic carried by [`ServiceError::NotFound`] for category lookups.
pub const CATEGORY_NOT_FOUND: &str = "category is not found";

/// Every way a category use case can fail.
///
/// The HTTP layer maps each variant to exactly one status code, so new
/// failure kinds belong here rather than in ad-hoc strings.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A lookup by id matched no row.
    #[error("{0}")]
    NotFound(String),

    /// The request violated one or more field rules.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// Transaction begin/commit/rollback or store I/O failed.
    #[error("database error: {0}")]
    Infrastructure(#[from] db::DbError),
}

impl ServiceError {
    pub(crate) fn category_not_found() -> Self {
        Self::NotFound(CATEGORY_NOT_FOUND.to_owned())
    }
}
