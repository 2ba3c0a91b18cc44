use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_all::GetAllReviewsUseCase;

pub struct GetAllReviewsUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllReviewsUseCase for GetAllReviewsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Review>, ReviewError> {
        self.logger.info("Getting all reviews");
        let reviews = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} reviews", reviews.len()));
        Ok(reviews)
    }
}
