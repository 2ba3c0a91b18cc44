use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart_item::use_cases::bulk_delete::{
    BulkDeleteCartItemsParams, BulkDeleteCartItemsUseCase, BulkDeleteOutcome,
};
use business::domain::cart_item::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use business::domain::cart_item::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use business::domain::cart_item::use_cases::get_all::GetAllCartItemsUseCase;
use business::domain::cart_item::use_cases::get_by_id::{
    GetCartItemByIdParams, GetCartItemByIdUseCase,
};
use business::domain::cart_item::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};

use crate::api::cart_item::dto::{
    BulkDeleteCartItemsRequest, CartItemResponse, CreateCartItemRequest, UpdateCartItemRequest,
};
use crate::api::envelope::Envelope;
use crate::api::error::IntoErrorEnvelope;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CartItemApi {
    get_all_use_case: Arc<dyn GetAllCartItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
    create_use_case: Arc<dyn CreateCartItemUseCase>,
    update_use_case: Arc<dyn UpdateCartItemUseCase>,
    delete_use_case: Arc<dyn DeleteCartItemUseCase>,
    bulk_delete_use_case: Arc<dyn BulkDeleteCartItemsUseCase>,
}

impl CartItemApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCartItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
        create_use_case: Arc<dyn CreateCartItemUseCase>,
        update_use_case: Arc<dyn UpdateCartItemUseCase>,
        delete_use_case: Arc<dyn DeleteCartItemUseCase>,
        bulk_delete_use_case: Arc<dyn BulkDeleteCartItemsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            bulk_delete_use_case,
        }
    }
}

/// Cart item management API
///
/// Endpoints for cart line items, including bulk and whole-cart removal.
#[OpenApi]
impl CartItemApi {
    /// List all cart items
    #[oai(path = "/cart-items", method = "get", tag = "ApiTags::CartItems")]
    async fn get_all(&self, _auth: JwtBearer) -> ListCartItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<CartItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                ListCartItemsResponse::Ok(Json(Envelope::success(responses, "cart_item.retrieved")))
            }
            Err(err) => {
                let (_status, message) = err.into_error_envelope();
                ListCartItemsResponse::InternalError(Json(Envelope::error(message)))
            }
        }
    }

    /// Get one cart item by id
    #[oai(path = "/cart-items/:id", method = "get", tag = "ApiTags::CartItems")]
    async fn get_by_id(&self, _auth: JwtBearer, id: Path<String>) -> GetCartItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetCartItemResponse::BadRequest(Json(Envelope::error(
                    "cart_item.invalid_id",
                )));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetCartItemByIdParams { id: uuid })
            .await
        {
            Ok(item) => {
                GetCartItemResponse::Ok(Json(Envelope::success(item.into(), "cart_item.retrieved")))
            }
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    404 => GetCartItemResponse::NotFound(Json(Envelope::error(message))),
                    _ => GetCartItemResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }

    /// Add an item to a cart
    ///
    /// Persists a new line item under the given cart and returns it.
    #[oai(
        path = "/cart-items/:cart_id/items",
        method = "post",
        tag = "ApiTags::CartItems"
    )]
    async fn create(
        &self,
        _auth: JwtBearer,
        cart_id: Path<String>,
        body: Json<CreateCartItemRequest>,
    ) -> CreateCartItemResponse {
        let cart_uuid = match Uuid::parse_str(&cart_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateCartItemResponse::BadRequest(Json(Envelope::error(
                    "cart_item.invalid_cart_id",
                )));
            }
        };
        let menu_item_id = match Uuid::parse_str(&body.0.menu_item_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateCartItemResponse::BadRequest(Json(Envelope::error(
                    "cart_item.invalid_menu_item_id",
                )));
            }
        };
        let price = match body.0.price.parse::<BigDecimal>() {
            Ok(price) => price,
            Err(_) => {
                return CreateCartItemResponse::BadRequest(Json(Envelope::error(
                    "cart_item.invalid_price",
                )));
            }
        };

        let params = CreateCartItemParams {
            cart_id: cart_uuid,
            menu_item_id,
            quantity: body.0.quantity,
            price,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateCartItemResponse::Created(Json(Envelope::success(
                item.into(),
                "cart_item.created",
            ))),
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    400 => CreateCartItemResponse::BadRequest(Json(Envelope::error(message))),
                    _ => CreateCartItemResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }

    /// Update a cart item
    ///
    /// Patches the quantity and/or price snapshot of a line item.
    #[oai(path = "/cart-items/:id", method = "put", tag = "ApiTags::CartItems")]
    async fn update(
        &self,
        _auth: JwtBearer,
        id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> UpdateCartItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCartItemResponse::BadRequest(Json(Envelope::error(
                    "cart_item.invalid_id",
                )));
            }
        };
        let price = match &body.0.price {
            Some(raw) => match raw.parse::<BigDecimal>() {
                Ok(price) => Some(price),
                Err(_) => {
                    return UpdateCartItemResponse::BadRequest(Json(Envelope::error(
                        "cart_item.invalid_price",
                    )));
                }
            },
            None => None,
        };

        let params = UpdateCartItemParams {
            id: uuid,
            quantity: body.0.quantity,
            price,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => {
                UpdateCartItemResponse::Ok(Json(Envelope::success(item.into(), "cart_item.updated")))
            }
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    400 => UpdateCartItemResponse::BadRequest(Json(Envelope::error(message))),
                    404 => UpdateCartItemResponse::NotFound(Json(Envelope::error(message))),
                    _ => UpdateCartItemResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }

    /// Delete a cart item
    ///
    /// Succeeds whether or not the item still exists.
    #[oai(path = "/cart-items/:id", method = "delete", tag = "ApiTags::CartItems")]
    async fn delete(&self, _auth: JwtBearer, id: Path<String>) -> DeleteCartItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteCartItemResponse::BadRequest(Json(Envelope::error(
                    "cart_item.invalid_id",
                )));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteCartItemParams { id: uuid })
            .await
        {
            Ok(()) => {
                DeleteCartItemResponse::Ok(Json(Envelope::success_empty("cart_item.deleted")))
            }
            Err(err) => {
                let (_status, message) = err.into_error_envelope();
                DeleteCartItemResponse::InternalError(Json(Envelope::error(message)))
            }
        }
    }

    /// Bulk delete cart items
    ///
    /// Deletes the listed items, or clears a whole cart when only a cart id
    /// is given. Rejects a request carrying neither.
    #[oai(path = "/cart-items", method = "delete", tag = "ApiTags::CartItems")]
    async fn bulk_delete(
        &self,
        _auth: JwtBearer,
        body: Json<BulkDeleteCartItemsRequest>,
    ) -> BulkDeleteCartItemsResponse {
        let mut item_ids = Vec::new();
        if let Some(raw_ids) = &body.0.item_ids {
            for raw in raw_ids {
                match Uuid::parse_str(raw) {
                    Ok(uuid) => item_ids.push(uuid),
                    Err(_) => {
                        return BulkDeleteCartItemsResponse::BadRequest(Json(Envelope::error(
                            "cart_item.invalid_id",
                        )));
                    }
                }
            }
        }
        let cart_id = match &body.0.cart_id {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return BulkDeleteCartItemsResponse::BadRequest(Json(Envelope::error(
                        "cart_item.invalid_cart_id",
                    )));
                }
            },
            None => None,
        };

        match self
            .bulk_delete_use_case
            .execute(BulkDeleteCartItemsParams { item_ids, cart_id })
            .await
        {
            Ok(BulkDeleteOutcome::ItemsDeleted(_)) => BulkDeleteCartItemsResponse::Ok(Json(
                Envelope::success_empty("cart_item.items_deleted"),
            )),
            Ok(BulkDeleteOutcome::CartCleared(_)) => BulkDeleteCartItemsResponse::Ok(Json(
                Envelope::success_empty("cart_item.cart_cleared"),
            )),
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    400 => BulkDeleteCartItemsResponse::BadRequest(Json(Envelope::error(message))),
                    _ => {
                        BulkDeleteCartItemsResponse::InternalError(Json(Envelope::error(message)))
                    }
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<CartItemResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<Vec<CartItemResponse>>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<CartItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<Envelope<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<CartItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartItemResponse {
    #[oai(status = 201)]
    Created(Json<Envelope<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<CartItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<CartItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<Envelope<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<CartItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<CartItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BulkDeleteCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<CartItemResponse>>),
}
