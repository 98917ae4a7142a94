//! Transactional category use cases.
//!
//! `CategoryService` is the orchestrator every request goes through:
//! 1. Opens one transaction per call via [`TxGuard::begin`], in write mode
//!    for create/update/delete so concurrent writers queue instead of
//!    failing.
//! 2. Validates the request (create/update).
//! 3. Checks that the target row exists (update/delete/find-by-id).
//! 4. Performs the store operation on the same open transaction.
//! 5. Hands the body's `Result` to [`TxGuard::finish`], which commits on
//!    `Ok` and rolls back on `Err` before returning it unchanged.
//!
//! Failures are never recovered here; they leave as [`ServiceError`] for the
//! caller to classify.

use std::sync::Arc;

use db::{CategoryRepository, DbPool, SqlCategoryRepository, SqliteConnection, TxGuard, TxMode};
use tracing::{info, instrument};

use crate::error::ServiceError;
use crate::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::validation::{RuleValidator, ValidationGate};

/// Category use cases bound to a pool, a store and a validator.
///
/// Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
    repository: Arc<dyn CategoryRepository>,
    validator: Arc<dyn ValidationGate>,
}

impl CategoryService {
    /// Wire the SQL repository and the rule validator.
    pub fn new(pool: DbPool) -> Self {
        Self::with_parts(pool, Arc::new(SqlCategoryRepository), Arc::new(RuleValidator))
    }

    /// Wire explicit collaborators, e.g. test doubles.
    pub fn with_parts(
        pool: DbPool,
        repository: Arc<dyn CategoryRepository>,
        validator: Arc<dyn ValidationGate>,
    ) -> Self {
        Self { pool, repository, validator }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateCategoryRequest) -> Result<Category, ServiceError> {
        let mut tx = TxGuard::begin(&self.pool, TxMode::Write, "create").await?;
        let result = self.create_in(&mut tx, request).await;
        tx.finish(result).await
    }

    /// Replace the name of category `id`.  `id` always wins over
    /// `request.id`.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: i64,
        mut request: UpdateCategoryRequest,
    ) -> Result<Category, ServiceError> {
        request.id = id;
        let mut tx = TxGuard::begin(&self.pool, TxMode::Write, "update").await?;
        let result = self.update_in(&mut tx, request).await;
        tx.finish(result).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut tx = TxGuard::begin(&self.pool, TxMode::Write, "delete").await?;
        let result = self.delete_in(&mut tx, id).await;
        tx.finish(result).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Category, ServiceError> {
        let mut tx = TxGuard::begin(&self.pool, TxMode::Read, "find_by_id").await?;
        let result = self.existing(&mut tx, id).await;
        tx.finish(result).await
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Category>, ServiceError> {
        let mut tx = TxGuard::begin(&self.pool, TxMode::Read, "find_all").await?;
        let result = self.repository.find_all(&mut tx).await.map_err(ServiceError::from);
        tx.finish(result).await
    }

    // -----------------------------------------------------------------------
    // Bodies — run on the open transaction's connection.
    // -----------------------------------------------------------------------

    async fn create_in(
        &self,
        conn: &mut SqliteConnection,
        request: CreateCategoryRequest,
    ) -> Result<Category, ServiceError> {
        self.validator.validate(&request)?;

        let category = self
            .repository
            .create(conn, Category::unsaved(request.name))
            .await?;

        info!("category {} created", category.id);
        Ok(category)
    }

    async fn update_in(
        &self,
        conn: &mut SqliteConnection,
        request: UpdateCategoryRequest,
    ) -> Result<Category, ServiceError> {
        self.validator.validate(&request)?;

        let mut category = self.existing(conn, request.id).await?;
        category.name = request.name;
        let category = self.repository.update(conn, category).await?;

        info!("category {} updated", category.id);
        Ok(category)
    }

    async fn delete_in(&self, conn: &mut SqliteConnection, id: i64) -> Result<(), ServiceError> {
        let category = self.existing(conn, id).await?;
        self.repository.delete(conn, &category).await?;

        info!("category {} deleted", category.id);
        Ok(())
    }

    async fn existing(&self, conn: &mut SqliteConnection, id: i64) -> Result<Category, ServiceError> {
        self.repository
            .find_by_id(conn, id)
            .await?
            .ok_or_else(ServiceError::category_not_found)
    }
}
