pub mod query_engine;
pub mod seed_service;
pub mod user_service;
