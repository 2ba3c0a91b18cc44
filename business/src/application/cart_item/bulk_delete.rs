use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::bulk_delete::{
    BulkDeleteCartItemsParams, BulkDeleteCartItemsUseCase, BulkDeleteOutcome,
};
use crate::domain::logger::Logger;

pub struct BulkDeleteCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BulkDeleteCartItemsUseCase for BulkDeleteCartItemsUseCaseImpl {
    async fn execute(
        &self,
        params: BulkDeleteCartItemsParams,
    ) -> Result<BulkDeleteOutcome, CartItemError> {
        if !params.item_ids.is_empty() {
            self.logger
                .info(&format!("Deleting {} cart items", params.item_ids.len()));

            let count = self.repository.delete_by_ids(&params.item_ids).await?;
            return Ok(BulkDeleteOutcome::ItemsDeleted(count));
        }

        if let Some(cart_id) = params.cart_id {
            self.logger.info(&format!("Clearing cart: {}", cart_id));

            let count = self.repository.delete_by_cart_id(cart_id).await?;
            return Ok(BulkDeleteOutcome::CartCleared(count));
        }

        self.logger
            .warn("Bulk delete request carried neither item ids nor a cart id");
        Err(CartItemError::MissingDeleteCriteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart_item::model::CartItem;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartItemRepo {}

        #[async_trait]
        impl CartItemRepository for CartItemRepo {
            async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CartItem, RepositoryError>;
            async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<u64, RepositoryError>;
            async fn delete_by_cart_id(&self, cart_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_exactly_the_requested_ids() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let expected = ids.clone();
        let mut mock_repo = MockCartItemRepo::new();

        mock_repo
            .expect_delete_by_ids()
            .withf(move |requested| requested == expected.as_slice())
            .returning(|requested| Ok(requested.len() as u64));

        let use_case = BulkDeleteCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkDeleteCartItemsParams {
                item_ids: ids,
                cart_id: None,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), BulkDeleteOutcome::ItemsDeleted(3));
    }

    #[tokio::test]
    async fn should_clear_cart_when_only_cart_id_given() {
        let cart_id = Uuid::new_v4();
        let mut mock_repo = MockCartItemRepo::new();

        mock_repo
            .expect_delete_by_cart_id()
            .withf(move |id| *id == cart_id)
            .returning(|_| Ok(5));

        let use_case = BulkDeleteCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkDeleteCartItemsParams {
                item_ids: vec![],
                cart_id: Some(cart_id),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), BulkDeleteOutcome::CartCleared(5));
    }

    #[tokio::test]
    async fn should_prefer_id_list_when_both_fields_present() {
        let ids = vec![Uuid::new_v4()];
        let mut mock_repo = MockCartItemRepo::new();

        // Only delete_by_ids is expected; clearing the cart would panic the mock.
        mock_repo.expect_delete_by_ids().returning(|_| Ok(1));

        let use_case = BulkDeleteCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkDeleteCartItemsParams {
                item_ids: ids,
                cart_id: Some(Uuid::new_v4()),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), BulkDeleteOutcome::ItemsDeleted(1));
    }

    #[tokio::test]
    async fn should_reject_when_neither_field_usable() {
        // No expectations: any repository call would panic the mock.
        let mock_repo = MockCartItemRepo::new();

        let use_case = BulkDeleteCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BulkDeleteCartItemsParams {
                item_ids: vec![],
                cart_id: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            CartItemError::MissingDeleteCriteria
        ));
    }
}
