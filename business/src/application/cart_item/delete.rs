use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartItemError> {
        self.logger
            .info(&format!("Deleting cart item: {}", params.id));

        // No existence check: removing an already-removed item is a success.
        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Cart item deleted: {}", params.id));
        Ok(())
    }
}
