pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::services::{seed_service::SeedService, user_service::UserService};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: UserService,
    pub seed_service: SeedService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let user_service = UserService::new(pool.clone());
        let seed_service = SeedService::new(user_service.clone(), config.seed_rng_seed);

        Self {
            pool,
            user_service,
            seed_service,
        }
    }
}
