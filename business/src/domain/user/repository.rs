use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserEmail;

use super::model::User;

/// Lookup port over the externally managed user store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_email(&self, email: &UserEmail) -> Result<User, RepositoryError>;
}
