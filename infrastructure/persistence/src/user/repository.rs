use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserEmail;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_email(&self, email: &UserEmail) -> Result<User, RepositoryError> {
        let entity =
            sqlx::query_as::<_, UserEntity>("SELECT id, email FROM users WHERE email = $1")
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
