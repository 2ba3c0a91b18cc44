use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart_item::errors::CartItemError;

/// Either a set of item ids or a whole cart to clear.
/// The id list takes precedence when both are present.
pub struct BulkDeleteCartItemsParams {
    pub item_ids: Vec<Uuid>,
    pub cart_id: Option<Uuid>,
}

/// Which branch ran, with the number of rows removed.
#[derive(Debug, PartialEq, Eq)]
pub enum BulkDeleteOutcome {
    ItemsDeleted(u64),
    CartCleared(u64),
}

#[async_trait]
pub trait BulkDeleteCartItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: BulkDeleteCartItemsParams,
    ) -> Result<BulkDeleteOutcome, CartItemError>;
}
