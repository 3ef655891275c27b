use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{dto::user_dto::MessageResponse, error::Result, AppState};

pub const ROOT_MESSAGE: &str = "User Management API";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    let body = json!({
        "status": "ok",
    });
    Ok((StatusCode::OK, Json(body)))
}
