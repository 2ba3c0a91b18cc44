use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart_item::errors::CartItemError;

pub struct DeleteCartItemParams {
    pub id: Uuid,
}

/// Removal is idempotent at the API level: deleting an id that no longer
/// exists still succeeds, so no existence check is performed.
#[async_trait]
pub trait DeleteCartItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartItemError>;
}
