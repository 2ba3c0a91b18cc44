use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::shared::value_objects::UserEmail;

pub struct UpdateReviewParams {
    pub id: Uuid,
    pub requester: UserEmail,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Only the owning user may mutate a review.
#[async_trait]
pub trait UpdateReviewUseCase: Send + Sync {
    async fn execute(&self, params: UpdateReviewParams) -> Result<Review, ReviewError>;
}
