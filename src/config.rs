// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Number of questions returned per page by the listing endpoints.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category id meaning "draw from every category".
pub const ALL_CATEGORIES_ID: i64 = 0;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub server_addr: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let server_addr = env::var("SERVER_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            rust_log,
            server_addr,
            db_max_connections,
        }
    }
}
