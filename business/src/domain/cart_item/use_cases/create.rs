use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

pub struct CreateCartItemParams {
    pub cart_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[async_trait]
pub trait CreateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartItemError>;
}
