use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart_item::repository::CartItemRepositoryPostgres;
use persistence::review::repository::ReviewRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::cart_item::bulk_delete::BulkDeleteCartItemsUseCaseImpl;
use business::application::cart_item::create::CreateCartItemUseCaseImpl;
use business::application::cart_item::delete::DeleteCartItemUseCaseImpl;
use business::application::cart_item::get_all::GetAllCartItemsUseCaseImpl;
use business::application::cart_item::get_by_id::GetCartItemByIdUseCaseImpl;
use business::application::cart_item::update::UpdateCartItemUseCaseImpl;
use business::application::review::create::CreateReviewUseCaseImpl;
use business::application::review::delete::DeleteReviewUseCaseImpl;
use business::application::review::get_all::GetAllReviewsUseCaseImpl;
use business::application::review::get_by_id::GetReviewByIdUseCaseImpl;
use business::application::review::update::UpdateReviewUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_item_api: crate::api::cart_item::routes::CartItemApi,
    pub review_api: crate::api::review::routes::ReviewApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_item_repository = Arc::new(CartItemRepositoryPostgres::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        // Cart item use cases
        let get_all_cart_items_use_case = Arc::new(GetAllCartItemsUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_item_by_id_use_case = Arc::new(GetCartItemByIdUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let create_cart_item_use_case = Arc::new(CreateCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let update_cart_item_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_cart_item_use_case = Arc::new(DeleteCartItemUseCaseImpl {
            repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let bulk_delete_cart_items_use_case = Arc::new(BulkDeleteCartItemsUseCaseImpl {
            repository: cart_item_repository,
            logger: logger.clone(),
        });

        // Review use cases
        let get_all_reviews_use_case = Arc::new(GetAllReviewsUseCaseImpl {
            repository: review_repository.clone(),
            logger: logger.clone(),
        });
        let get_review_by_id_use_case = Arc::new(GetReviewByIdUseCaseImpl {
            repository: review_repository.clone(),
            logger: logger.clone(),
        });
        let create_review_use_case = Arc::new(CreateReviewUseCaseImpl {
            repository: review_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });
        let update_review_use_case = Arc::new(UpdateReviewUseCaseImpl {
            repository: review_repository.clone(),
            users: user_repository.clone(),
            logger: logger.clone(),
        });
        let delete_review_use_case = Arc::new(DeleteReviewUseCaseImpl {
            repository: review_repository,
            users: user_repository,
            logger,
        });

        let cart_item_api = crate::api::cart_item::routes::CartItemApi::new(
            get_all_cart_items_use_case,
            get_cart_item_by_id_use_case,
            create_cart_item_use_case,
            update_cart_item_use_case,
            delete_cart_item_use_case,
            bulk_delete_cart_items_use_case,
        );

        let review_api = crate::api::review::routes::ReviewApi::new(
            get_all_reviews_use_case,
            get_review_by_id_use_case,
            create_review_use_case,
            update_review_use_case,
            delete_review_use_case,
        );

        Self {
            health_api,
            cart_item_api,
            review_api,
        }
    }
}
