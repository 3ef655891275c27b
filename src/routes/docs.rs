use axum::Json;
use utoipa::OpenApi;

use crate::dto::user_dto::{MessageResponse, UserListResponse, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "User Management API"),
    paths(super::health::root, super::users::list_users),
    components(schemas(MessageResponse, UserListResponse, UserResponse))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
