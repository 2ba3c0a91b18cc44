use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};
use crate::domain::user::repository::UserRepository;

pub struct DeleteReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteReviewUseCase for DeleteReviewUseCaseImpl {
    async fn execute(&self, params: DeleteReviewParams) -> Result<(), ReviewError> {
        self.logger
            .info(&format!("Deleting review: {}", params.id));

        let user = self
            .users
            .get_by_email(&params.requester)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::UserNotFound,
                other => ReviewError::Repository(other),
            })?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::NotFound,
                other => ReviewError::Repository(other),
            })?;

        if !existing.is_owned_by(user.id) {
            self.logger.warn(&format!(
                "User {} attempted to delete review {} owned by {}",
                user.id, existing.id, existing.user_id
            ));
            return Err(ReviewError::NotOwner);
        }

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Review deleted: {}", params.id));
        Ok(())
    }
}
