use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartItemUseCase for CreateCartItemUseCaseImpl {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Adding item to cart {}", params.cart_id));

        let item = CartItem::new(
            params.cart_id,
            params.menu_item_id,
            params.quantity,
            params.price,
        )?;
        self.repository.save(&item).await?;

        self.logger.info(&format!("Cart item created: {}", item.id));
        Ok(item)
    }
}
