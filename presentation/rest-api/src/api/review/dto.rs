use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Object)]
pub struct CreateReviewRequest {
    /// Rating from 1 to 5
    pub rating: i32,
    /// Free-form comment
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateReviewRequest {
    /// New rating from 1 to 5
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<i32>,
    /// New comment
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    /// Review unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Reviewed menu item
    pub menu_item_id: String,
    /// Rating from 1 to 5
    pub rating: i32,
    /// Free-form comment
    pub comment: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            menu_item_id: review.menu_item_id.to_string(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
