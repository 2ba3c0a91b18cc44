use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::{RATING_MAX, RATING_MIN, Review};
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::update::{UpdateReviewParams, UpdateReviewUseCase};
use crate::domain::user::repository::UserRepository;

pub struct UpdateReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateReviewUseCase for UpdateReviewUseCaseImpl {
    async fn execute(&self, params: UpdateReviewParams) -> Result<Review, ReviewError> {
        self.logger
            .info(&format!("Updating review: {}", params.id));

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
                "User {} attempted to update review {} owned by {}",
                user.id, existing.id, existing.user_id
            ));
            return Err(ReviewError::NotOwner);
        }

        let rating = params.rating.unwrap_or(existing.rating);
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange);
        }

        let comment = params.comment.unwrap_or(existing.comment);

        let updated = Review::from_repository(
            existing.id,
            existing.user_id,
            existing.menu_item_id,
            rating,
            comment,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Review updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserEmail;
    use crate::domain::user::model::User;
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
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_by_email(&self, email: &UserEmail) -> Result<User, RepositoryError>;
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

    fn known_user(user_id: Uuid) -> MockUserRepo {
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_email()
            .returning(move |email| Ok(User::from_repository(user_id, email.clone())));
        users
    }

    fn stored_review(review_id: Uuid, owner_id: Uuid) -> Review {
        Review::from_repository(
            review_id,
            owner_id,
            Uuid::new_v4(),
            3,
            "Decent".to_string(),
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_update_review_when_requester_is_owner() {
        let review_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_review(review_id, owner_id)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(owner_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateReviewParams {
                id: review_id,
                requester: UserEmail::new("owner@example.com"),
                rating: Some(5),
                comment: Some("Changed my mind, excellent".to_string()),
            })
            .await;

        assert!(result.is_ok());
        let review = result.unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, "Changed my mind, excellent");
    }

    #[tokio::test]
    async fn should_keep_fields_not_present_in_patch() {
        let review_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_review(review_id, owner_id)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(owner_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateReviewParams {
                id: review_id,
                requester: UserEmail::new("owner@example.com"),
                rating: Some(4),
                comment: None,
            })
            .await;

        assert!(result.is_ok());
        let review = result.unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.comment, "Decent");
    }

    #[tokio::test]
    async fn should_reject_update_by_non_owner() {
        let review_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let intruder_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        // save is not expected; a write by a non-owner would panic the mock.
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_review(review_id, owner_id)));

        let use_case = UpdateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(intruder_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateReviewParams {
                id: review_id,
                requester: UserEmail::new("intruder@example.com"),
                rating: Some(1),
                comment: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::NotOwner));
    }

    #[tokio::test]
    async fn should_return_not_found_when_review_does_not_exist() {
        let mut mock_repo = MockReviewRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(Uuid::new_v4())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateReviewParams {
                id: Uuid::new_v4(),
                requester: UserEmail::new("owner@example.com"),
                rating: Some(4),
                comment: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_patched_rating_out_of_range() {
        let review_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_review(review_id, owner_id)));

        let use_case = UpdateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(owner_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateReviewParams {
                id: review_id,
                requester: UserEmail::new("owner@example.com"),
                rating: Some(0),
                comment: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::RatingOutOfRange));
    }
}
