use poem::http::StatusCode;

use business::domain::review::errors::ReviewError;

use crate::api::error::IntoErrorEnvelope;

impl IntoErrorEnvelope for ReviewError {
    fn into_error_envelope(self) -> (StatusCode, String) {
        let (status, message) = match &self {
            ReviewError::RatingOutOfRange => (StatusCode::BAD_REQUEST, "review.rating_out_of_range"),
            ReviewError::NotFound => (StatusCode::NOT_FOUND, "review.not_found"),
            // A duplicate review is a client error, not a conflict, per the
            // original API contract.
            ReviewError::AlreadyReviewed => (StatusCode::BAD_REQUEST, "review.already_reviewed"),
            ReviewError::NotOwner => (StatusCode::FORBIDDEN, "review.not_owner"),
            ReviewError::UserNotFound => (StatusCode::NOT_FOUND, "review.user_not_found"),
            ReviewError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (status, message.to_string())
    }
}
