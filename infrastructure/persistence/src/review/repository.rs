use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::repository::ReviewRepository;

use super::entity::ReviewEntity;

pub struct ReviewRepositoryPostgres {
    pool: PgPool,
}

impl ReviewRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Review>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, user_id, menu_item_id, rating, comment, created_at, updated_at FROM reviews ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError> {
        let entity = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, user_id, menu_item_id, rating, comment, created_at, updated_at FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_user_and_menu_item(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
    ) -> Result<Option<Review>, RepositoryError> {
        let entity = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, user_id, menu_item_id, rating, comment, created_at, updated_at FROM reviews WHERE user_id = $1 AND menu_item_id = $2",
        )
        .bind(user_id)
        .bind(menu_item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, review: &Review) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO reviews (id, user_id, menu_item_id, rating, comment, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                rating = EXCLUDED.rating,
                comment = EXCLUDED.comment,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(review.id)
        .bind(review.user_id)
        .bind(review.menu_item_id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // The unique index on (user_id, menu_item_id) closes the race the
            // application-level duplicate check leaves open.
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
