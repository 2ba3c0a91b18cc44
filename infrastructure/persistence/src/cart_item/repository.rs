use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart_item::model::CartItem;
use business::domain::cart_item::repository::CartItemRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;

pub struct CartItemRepositoryPostgres {
    pool: PgPool,
}

impl CartItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartItemRepository for CartItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, cart_id, menu_item_id, quantity, price, created_at, updated_at FROM cart_items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, cart_id, menu_item_id, quantity, price, created_at, updated_at FROM cart_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_items (id, cart_id, menu_item_id, quantity, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                quantity = EXCLUDED.quantity,
                price = EXCLUDED.price,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(item.id)
        .bind(item.cart_id)
        .bind(item.menu_item_id)
        .bind(item.quantity)
        .bind(&item.price)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_cart_id(&self, cart_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
