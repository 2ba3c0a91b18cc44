use poem::http::StatusCode;

use business::domain::cart_item::errors::CartItemError;

use crate::api::error::IntoErrorEnvelope;

impl IntoErrorEnvelope for CartItemError {
    fn into_error_envelope(self) -> (StatusCode, String) {
        let (status, message) = match &self {
            CartItemError::QuantityNotPositive => {
                (StatusCode::BAD_REQUEST, "cart_item.quantity_not_positive")
            }
            CartItemError::PriceNegative => (StatusCode::BAD_REQUEST, "cart_item.price_negative"),
            CartItemError::NotFound => (StatusCode::NOT_FOUND, "cart_item.not_found"),
            CartItemError::MissingDeleteCriteria => {
                (StatusCode::BAD_REQUEST, "cart_item.delete_criteria_missing")
            }
            CartItemError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (status, message.to_string())
    }
}
