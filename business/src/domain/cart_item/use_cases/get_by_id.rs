use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

pub struct GetCartItemByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetCartItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartItemError>;
}
