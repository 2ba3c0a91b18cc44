use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::shared::value_objects::UserEmail;

pub struct CreateReviewParams {
    pub requester: UserEmail,
    pub menu_item_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

/// Rejects a second review by the same user for the same menu item.
#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError>;
}
