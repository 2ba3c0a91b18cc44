use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::shared::value_objects::UserEmail;

pub struct DeleteReviewParams {
    pub id: Uuid,
    pub requester: UserEmail,
}

/// Only the owning user may remove a review.
#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, params: DeleteReviewParams) -> Result<(), ReviewError>;
}
