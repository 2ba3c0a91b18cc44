use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart_item::model::CartItem;

#[derive(Debug, Clone, Object)]
pub struct CreateCartItemRequest {
    /// Menu item being added to the cart
    pub menu_item_id: String,
    /// Number of units, at least 1
    pub quantity: i32,
    /// Unit price snapshot as a decimal string
    pub price: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
    /// New price snapshot as a decimal string
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct BulkDeleteCartItemsRequest {
    /// Item ids to delete; takes precedence over cart_id when non-empty
    #[oai(skip_serializing_if_is_none)]
    pub item_ids: Option<Vec<String>>,
    /// Cart whose items should all be removed
    #[oai(skip_serializing_if_is_none)]
    pub cart_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Cart item unique identifier
    pub id: String,
    /// Owning cart
    pub cart_id: String,
    /// Referenced menu item
    pub menu_item_id: String,
    /// Number of units
    pub quantity: i32,
    /// Price snapshot as a decimal string
    pub price: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            cart_id: item.cart_id.to_string(),
            menu_item_id: item.menu_item_id.to_string(),
            quantity: item.quantity,
            price: item.price.to_string(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
