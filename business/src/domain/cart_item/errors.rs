#[derive(Debug, thiserror::Error)]
pub enum CartItemError {
    #[error("cart_item.quantity_not_positive")]
    QuantityNotPositive,
    #[error("cart_item.price_negative")]
    PriceNegative,
    #[error("cart_item.not_found")]
    NotFound,
    #[error("cart_item.delete_criteria_missing")]
    MissingDeleteCriteria,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
