use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;

pub struct GetReviewByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetReviewByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetReviewByIdParams) -> Result<Review, ReviewError>;
}
