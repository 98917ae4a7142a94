//! Category CRUD operations.

use async_trait::async_trait;
use sqlx::SqliteConnection;

use crate::{DbError, models::Category};

/// Store gateway for categories.
///
/// Implemented by [`SqlCategoryRepository`]; tests substitute their own.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert `category` and return it with the database-assigned `id`.
    async fn create(
        &self,
        conn: &mut SqliteConnection,
        category: Category,
    ) -> Result<Category, DbError>;

    /// Replace the `name` of the row matching `category.id`.
    ///
    /// Existence is not checked here.
    async fn update(
        &self,
        conn: &mut SqliteConnection,
        category: Category,
    ) -> Result<Category, DbError>;

    /// Remove the row matching `category.id`.
    async fn delete(&self, conn: &mut SqliteConnection, category: &Category) -> Result<(), DbError>;

    /// Fetch a single category by primary key; `None` when no row matches.
    async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<Category>, DbError>;

    /// Return every category in primary-key order.
    async fn find_all(&self, conn: &mut SqliteConnection) -> Result<Vec<Category>, DbError>;
}

/// SQLite-backed [`CategoryRepository`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlCategoryRepository;

#[async_trait]
impl CategoryRepository for SqlCategoryRepository {
    async fn create(
        &self,
        conn: &mut SqliteConnection,
        category: Category,
    ) -> Result<Category, DbError> {
        let result = sqlx::query("INSERT INTO category (name) VALUES (?)")
            .bind(&category.name)
            .execute(&mut *conn)
            .await?;

        Ok(Category {
            id: result.last_insert_rowid(),
            name: category.name,
        })
    }

    async fn update(
        &self,
        conn: &mut SqliteConnection,
        category: Category,
    ) -> Result<Category, DbError> {
        sqlx::query("UPDATE category SET name = ? WHERE id = ?")
            .bind(&category.name)
            .bind(category.id)
            .execute(&mut *conn)
            .await?;

        Ok(category)
    }

    async fn delete(&self, conn: &mut SqliteConnection, category: &Category) -> Result<(), DbError> {
        sqlx::query("DELETE FROM category WHERE id = ?")
            .bind(category.id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<Category>, DbError> {
        let row = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row)
    }

    async fn find_all(&self, conn: &mut SqliteConnection) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{create_pool, run_migrations};
    use crate::DbPool;

    async fn setup() -> DbPool {
        let pool = create_pool("sqlite::memory:", 1).await.expect("pool");
        run_migrations(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_and_ignores_caller_id() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let repo = SqlCategoryRepository;

        let first = repo
            .create(&mut conn, Category { id: 99, name: "Gadget".into() })
            .await
            .unwrap();
        let second = repo.create(&mut conn, Category::unsaved("Gadget")).await.unwrap();

        assert!(first.id > 0);
        assert_ne!(first.id, 99);
        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Gadget");
    }

    #[tokio::test]
    async fn find_by_id_reports_absence_as_none() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();

        let found = SqlCategoryRepository.find_by_id(&mut conn, 404).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_replaces_name_only() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let repo = SqlCategoryRepository;

        let created = repo.create(&mut conn, Category::unsaved("Gadget")).await.unwrap();
        let updated = repo
            .update(&mut conn, Category { id: created.id, name: "Laptop".into() })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let reread = repo.find_by_id(&mut conn, created.id).await.unwrap().unwrap();
        assert_eq!(reread.name, "Laptop");
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let repo = SqlCategoryRepository;

        let created = repo.create(&mut conn, Category::unsaved("Gadget")).await.unwrap();
        repo.delete(&mut conn, &created).await.unwrap();

        assert!(repo.find_by_id(&mut conn, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_is_empty_then_in_id_order() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let repo = SqlCategoryRepository;

        assert!(repo.find_all(&mut conn).await.unwrap().is_empty());

        for name in ["Gadget", "Laptop", "Phone"] {
            repo.create(&mut conn, Category::unsaved(name)).await.unwrap();
        }

        let all = repo.find_all(&mut conn).await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget", "Laptop", "Phone"]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
