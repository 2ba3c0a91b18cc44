use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart_item::model::CartItem;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            self.cart_id,
            self.menu_item_id,
            self.quantity,
            self.price,
            self.created_at,
            self.updated_at,
        )
    }
}
