use uuid::Uuid;

use crate::domain::shared::value_objects::UserEmail;

/// External user entity, read here only to resolve the authenticated
/// principal to a durable identifier for ownership checks.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: UserEmail,
}

impl User {
    pub fn from_repository(id: Uuid, email: UserEmail) -> Self {
        Self { id, email }
    }
}
