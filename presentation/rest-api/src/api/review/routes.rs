use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};
use business::domain::review::use_cases::delete::{DeleteReviewParams, DeleteReviewUseCase};
use business::domain::review::use_cases::get_all::GetAllReviewsUseCase;
use business::domain::review::use_cases::get_by_id::{GetReviewByIdParams, GetReviewByIdUseCase};
use business::domain::review::use_cases::update::{UpdateReviewParams, UpdateReviewUseCase};
use business::domain::shared::value_objects::UserEmail;

use crate::api::envelope::Envelope;
use crate::api::error::IntoErrorEnvelope;
use crate::api::review::dto::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    get_all_use_case: Arc<dyn GetAllReviewsUseCase>,
    get_by_id_use_case: Arc<dyn GetReviewByIdUseCase>,
    create_use_case: Arc<dyn CreateReviewUseCase>,
    update_use_case: Arc<dyn UpdateReviewUseCase>,
    delete_use_case: Arc<dyn DeleteReviewUseCase>,
}

impl ReviewApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllReviewsUseCase>,
        get_by_id_use_case: Arc<dyn GetReviewByIdUseCase>,
        create_use_case: Arc<dyn CreateReviewUseCase>,
        update_use_case: Arc<dyn UpdateReviewUseCase>,
        delete_use_case: Arc<dyn DeleteReviewUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Menu item review API
///
/// Endpoints for user reviews. One review per user per menu item; only the
/// owner may change or remove a review.
#[OpenApi]
impl ReviewApi {
    /// List all reviews
    #[oai(path = "/reviews", method = "get", tag = "ApiTags::Reviews")]
    async fn get_all(&self, _auth: JwtBearer) -> ListReviewsResponse {
        match self.get_all_use_case.execute().await {
            Ok(reviews) => {
                let responses: Vec<ReviewResponse> =
                    reviews.into_iter().map(|r| r.into()).collect();
                ListReviewsResponse::Ok(Json(Envelope::success(responses, "review.retrieved")))
            }
            Err(err) => {
                let (_status, message) = err.into_error_envelope();
                ListReviewsResponse::InternalError(Json(Envelope::error(message)))
            }
        }
    }

    /// Get one review by id
    #[oai(path = "/reviews/:id", method = "get", tag = "ApiTags::Reviews")]
    async fn get_by_id(&self, _auth: JwtBearer, id: Path<String>) -> GetReviewResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetReviewResponse::BadRequest(Json(Envelope::error("review.invalid_id")));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetReviewByIdParams { id: uuid })
            .await
        {
            Ok(review) => {
                GetReviewResponse::Ok(Json(Envelope::success(review.into(), "review.retrieved")))
            }
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    404 => GetReviewResponse::NotFound(Json(Envelope::error(message))),
                    _ => GetReviewResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }

    /// Submit a review for a menu item
    ///
    /// The path id is the menu item being reviewed. The caller may review
    /// each menu item once; a second submission is rejected without writing
    /// anything.
    #[oai(path = "/reviews/:id", method = "post", tag = "ApiTags::Reviews")]
    async fn create(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<CreateReviewRequest>,
    ) -> CreateReviewResponse {
        let menu_item_uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateReviewResponse::BadRequest(Json(Envelope::error(
                    "review.invalid_menu_item_id",
                )));
            }
        };

        let params = CreateReviewParams {
            requester: UserEmail::new(auth.0),
            menu_item_id: menu_item_uuid,
            rating: body.0.rating,
            comment: body.0.comment.unwrap_or_default(),
        };

        match self.create_use_case.execute(params).await {
            Ok(review) => {
                CreateReviewResponse::Created(Json(Envelope::success(review.into(), "review.created")))
            }
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    400 => CreateReviewResponse::BadRequest(Json(Envelope::error(message))),
                    404 => CreateReviewResponse::NotFound(Json(Envelope::error(message))),
                    _ => CreateReviewResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }

    /// Update a review
    ///
    /// Only the owning user may change a review.
    #[oai(path = "/reviews/:id", method = "put", tag = "ApiTags::Reviews")]
    async fn update(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<UpdateReviewRequest>,
    ) -> UpdateReviewResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateReviewResponse::BadRequest(Json(Envelope::error("review.invalid_id")));
            }
        };

        let params = UpdateReviewParams {
            id: uuid,
            requester: UserEmail::new(auth.0),
            rating: body.0.rating,
            comment: body.0.comment,
        };

        match self.update_use_case.execute(params).await {
            Ok(review) => {
                UpdateReviewResponse::Ok(Json(Envelope::success(review.into(), "review.updated")))
            }
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    400 => UpdateReviewResponse::BadRequest(Json(Envelope::error(message))),
                    403 => UpdateReviewResponse::Forbidden(Json(Envelope::error(message))),
                    404 => UpdateReviewResponse::NotFound(Json(Envelope::error(message))),
                    _ => UpdateReviewResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }

    /// Delete a review
    ///
    /// Only the owning user may remove a review.
    #[oai(path = "/reviews/:id", method = "delete", tag = "ApiTags::Reviews")]
    async fn delete(&self, auth: JwtBearer, id: Path<String>) -> DeleteReviewResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteReviewResponse::BadRequest(Json(Envelope::error("review.invalid_id")));
            }
        };

        let params = DeleteReviewParams {
            id: uuid,
            requester: UserEmail::new(auth.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteReviewResponse::Ok(Json(Envelope::success_empty("review.deleted"))),
            Err(err) => {
                let (status, message) = err.into_error_envelope();
                match status.as_u16() {
                    403 => DeleteReviewResponse::Forbidden(Json(Envelope::error(message))),
                    404 => DeleteReviewResponse::NotFound(Json(Envelope::error(message))),
                    _ => DeleteReviewResponse::InternalError(Json(Envelope::error(message))),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<ReviewResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<Vec<ReviewResponse>>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReviewResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<ReviewResponse>>),
    #[oai(status = 404)]
    NotFound(Json<Envelope<ReviewResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<ReviewResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateReviewResponse {
    #[oai(status = 201)]
    Created(Json<Envelope<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<ReviewResponse>>),
    #[oai(status = 404)]
    NotFound(Json<Envelope<ReviewResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<ReviewResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateReviewResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<ReviewResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<Envelope<ReviewResponse>>),
    #[oai(status = 404)]
    NotFound(Json<Envelope<ReviewResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<ReviewResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteReviewResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<Envelope<ReviewResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<Envelope<ReviewResponse>>),
    #[oai(status = 404)]
    NotFound(Json<Envelope<ReviewResponse>>),
    #[oai(status = 500)]
    InternalError(Json<Envelope<ReviewResponse>>),
}
