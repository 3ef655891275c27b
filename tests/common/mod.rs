#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use user_directory::{
    config::Config,
    database::pool::{create_pool, run_migrations},
    middleware::cors::cors_layer,
    models::user::NewUser,
    routes::build_router,
    AppState,
};

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        seed_rng_seed: Some(42),
        ..Config::default()
    }
}

pub async fn setup_state() -> AppState {
    let config = test_config();
    let pool = create_pool(&config).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    AppState::new(pool, &config)
}

pub fn app(state: AppState) -> Router {
    build_router(state, cors_layer(&test_config().cors_allowed_origins))
}

pub fn new_user(first_name: &str, company: &str, salary: f64) -> NewUser {
    NewUser {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        company: company.to_string(),
        department: "Engineering".to_string(),
        salary,
        phone: "555-0100".to_string(),
    }
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}
