pub mod docs;
pub mod health;
pub mod users;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/users", get(users::list_users))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
