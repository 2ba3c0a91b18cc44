#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.rating_out_of_range")]
    RatingOutOfRange,
    #[error("review.not_found")]
    NotFound,
    #[error("review.already_reviewed")]
    AlreadyReviewed,
    #[error("review.not_owner")]
    NotOwner,
    #[error("review.user_not_found")]
    UserNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
