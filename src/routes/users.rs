use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::user_dto::{UserListQuery, UserListResponse},
    error::Result,
    services::query_engine::UserQuery,
    AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users", body = UserListResponse),
        (status = 400, description = "page or size not an integer or out of range")
    )
)]
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse> {
    let query = UserListQuery::from_pairs(pairs)?;
    query.validate()?;
    let query = UserQuery::try_from(query)?;

    state.seed_service.ensure_seeded().await?;

    tracing::debug!(
        page = query.page,
        size = query.size,
        search = query.search.as_deref().unwrap_or(""),
        sort_by = query.sort_by.map(|field| field.as_str()).unwrap_or("<none>"),
        sort_order = ?query.sort_order,
        "listing users"
    );
    let page = state.user_service.query(&query).await?;
    Ok(Json(UserListResponse::from(page)))
}
