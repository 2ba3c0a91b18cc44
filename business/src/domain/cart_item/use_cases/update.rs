use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

pub struct UpdateCartItemParams {
    pub id: Uuid,
    pub quantity: Option<i32>,
    pub price: Option<BigDecimal>,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartItemError>;
}
