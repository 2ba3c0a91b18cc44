use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Updating cart item: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartItemError::NotFound,
                other => CartItemError::Repository(other),
            })?;

        let quantity = params.quantity.unwrap_or(existing.quantity);
        if quantity < 1 {
            return Err(CartItemError::QuantityNotPositive);
        }

        let price = match params.price {
            Some(p) if p < BigDecimal::from(0) => return Err(CartItemError::PriceNegative),
            Some(p) => p,
            None => existing.price,
        };

        let updated = CartItem::from_repository(
            existing.id,
            existing.cart_id,
            existing.menu_item_id,
            quantity,
            price,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Cart item updated: {}", updated.id));
        Ok(updated)
    }
}
