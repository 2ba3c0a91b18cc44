use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::get_by_id::{GetCartItemByIdParams, GetCartItemByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCartItemByIdUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemByIdUseCase for GetCartItemByIdUseCaseImpl {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Fetching cart item by id: {}", params.id));

        let item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartItemError::NotFound,
                other => CartItemError::Repository(other),
            })?;

        Ok(item)
    }
}
