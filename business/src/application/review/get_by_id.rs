use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_by_id::{GetReviewByIdParams, GetReviewByIdUseCase};

pub struct GetReviewByIdUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReviewByIdUseCase for GetReviewByIdUseCaseImpl {
    async fn execute(&self, params: GetReviewByIdParams) -> Result<Review, ReviewError> {
        self.logger
            .info(&format!("Fetching review by id: {}", params.id));

        let review = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::NotFound,
                other => ReviewError::Repository(other),
            })?;

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ReviewRepo {}

        #[async_trait]
        impl ReviewRepository for ReviewRepo {
            async fn get_all(&self) -> Result<Vec<Review>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError>;
            async fn find_by_user_and_menu_item(&self, user_id: Uuid, menu_item_id: Uuid) -> Result<Option<Review>, RepositoryError>;
            async fn save(&self, review: &Review) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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
    async fn should_return_review_when_exists() {
        let review_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == review_id)
            .returning(move |_| {
                Ok(Review::from_repository(
                    review_id,
                    Uuid::new_v4(),
                    Uuid::new_v4(),
                    4,
                    "Crispy".to_string(),
                    chrono::Utc::now(),
                    chrono::Utc::now(),
                ))
            });

        let use_case = GetReviewByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetReviewByIdParams { id: review_id }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, review_id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_review_does_not_exist() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetReviewByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetReviewByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::NotFound));
    }
}
