use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartItemError;

/// One line entry within a cart: a menu item, how many, and the price
/// captured at the moment it was added.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(
        cart_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
        price: BigDecimal,
    ) -> Result<Self, CartItemError> {
        if quantity < 1 {
            return Err(CartItemError::QuantityNotPositive);
        }
        if price < BigDecimal::from(0) {
            return Err(CartItemError::PriceNegative);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            cart_id,
            menu_item_id,
            quantity,
            price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        cart_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
        price: BigDecimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            cart_id,
            menu_item_id,
            quantity,
            price,
            created_at,
            updated_at,
        }
    }
}
