use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Review>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError>;
    async fn find_by_user_and_menu_item(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
    ) -> Result<Option<Review>, RepositoryError>;
    async fn save(&self, review: &Review) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
