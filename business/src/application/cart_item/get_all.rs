use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::get_all::GetAllCartItemsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartItemsUseCase for GetAllCartItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CartItem>, CartItemError> {
        self.logger.info("Getting all cart items");
        let items = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} cart items", items.len()));
        Ok(items)
    }
}
