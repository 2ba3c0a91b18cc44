use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};
use crate::domain::user::repository::UserRepository;

pub struct CreateReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub users: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateReviewUseCase for CreateReviewUseCaseImpl {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError> {
        self.logger.info(&format!(
            "Creating review for menu item {} by {}",
            params.menu_item_id, params.requester
        ));

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
            .find_by_user_and_menu_item(user.id, params.menu_item_id)
            .await?;
        if existing.is_some() {
            self.logger.warn(&format!(
                "User {} already reviewed menu item {}",
                user.id, params.menu_item_id
            ));
            return Err(ReviewError::AlreadyReviewed);
        }

        let review = Review::new(user.id, params.menu_item_id, params.rating, params.comment)?;

        // A concurrent create can slip past the check above; the unique index
        // on (user_id, menu_item_id) surfaces it as Duplicated.
        self.repository.save(&review).await.map_err(|e| match e {
            RepositoryError::Duplicated => ReviewError::AlreadyReviewed,
            other => ReviewError::Repository(other),
        })?;

        self.logger.info(&format!("Review created: {}", review.id));
        Ok(review)
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

    #[tokio::test]
    async fn should_create_review_when_first_for_menu_item() {
        let user_id = Uuid::new_v4();
        let menu_item_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_find_by_user_and_menu_item()
            .withf(move |uid, mid| *uid == user_id && *mid == menu_item_id)
            .returning(|_, _| Ok(None));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(user_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReviewParams {
                requester: UserEmail::new("diner@example.com"),
                menu_item_id,
                rating: 5,
                comment: "Best banh mi in town".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let review = result.unwrap();
        assert_eq!(review.user_id, user_id);
        assert_eq!(review.menu_item_id, menu_item_id);
        assert_eq!(review.rating, 5);
    }

    #[tokio::test]
    async fn should_reject_second_review_for_same_menu_item() {
        let user_id = Uuid::new_v4();
        let menu_item_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        // save is not expected; a second write would panic the mock.
        mock_repo
            .expect_find_by_user_and_menu_item()
            .returning(move |uid, mid| {
                Ok(Some(Review::from_repository(
                    Uuid::new_v4(),
                    uid,
                    mid,
                    4,
                    "Already said it".to_string(),
                    chrono::Utc::now(),
                    chrono::Utc::now(),
                )))
            });

        let use_case = CreateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(user_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReviewParams {
                requester: UserEmail::new("diner@example.com"),
                menu_item_id,
                rating: 2,
                comment: String::new(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::AlreadyReviewed));
    }

    #[tokio::test]
    async fn should_map_storage_duplicate_to_already_reviewed() {
        let user_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_find_by_user_and_menu_item()
            .returning(|_, _| Ok(None));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(user_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReviewParams {
                requester: UserEmail::new("diner@example.com"),
                menu_item_id: Uuid::new_v4(),
                rating: 3,
                comment: String::new(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::AlreadyReviewed));
    }

    #[tokio::test]
    async fn should_reject_when_rating_out_of_range() {
        let user_id = Uuid::new_v4();
        let mut mock_repo = MockReviewRepo::new();

        mock_repo
            .expect_find_by_user_and_menu_item()
            .returning(|_, _| Ok(None));

        let use_case = CreateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(known_user(user_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReviewParams {
                requester: UserEmail::new("diner@example.com"),
                menu_item_id: Uuid::new_v4(),
                rating: 6,
                comment: String::new(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::RatingOutOfRange));
    }

    #[tokio::test]
    async fn should_fail_when_principal_has_no_user_record() {
        let mock_repo = MockReviewRepo::new();
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_email()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            users: Arc::new(users),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateReviewParams {
                requester: UserEmail::new("ghost@example.com"),
                menu_item_id: Uuid::new_v4(),
                rating: 3,
                comment: String::new(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ReviewError::UserNotFound));
    }
}
