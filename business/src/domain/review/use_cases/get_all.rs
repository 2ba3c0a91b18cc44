use async_trait::async_trait;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;

#[async_trait]
pub trait GetAllReviewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Review>, ReviewError>;
}
