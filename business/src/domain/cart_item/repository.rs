use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::CartItem;

#[async_trait]
pub trait CartItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CartItem, RepositoryError>;
    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<u64, RepositoryError>;
    async fn delete_by_cart_id(&self, cart_id: Uuid) -> Result<u64, RepositoryError>;
}
