use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

#[async_trait]
pub trait GetAllCartItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CartItem>, CartItemError>;
}
