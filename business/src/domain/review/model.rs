use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ReviewError;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// A rating and comment left by one user on one menu item.
/// At most one review exists per (user, menu item) pair.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub menu_item_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        user_id: Uuid,
        menu_item_id: Uuid,
        rating: i32,
        comment: String,
    ) -> Result<Self, ReviewError> {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            menu_item_id,
            rating,
            comment,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: Uuid,
        menu_item_id: Uuid,
        rating: i32,
        comment: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            menu_item_id,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
