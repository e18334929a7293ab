//! Integration and unit tests for the Buchregal application.
//!
//! ## Test Modules
//!
//! - **catalog_tests**: Book validation and in-memory store tests
//! - **books_api_tests**: End-to-end catalog API tests
//! - **task_tests**: Task guard and request gate tests
//! - **error_tests**: Error handling and response mapping tests
//! - **config_tests**: Configuration loading and validation tests

pub mod catalog_tests;
pub mod error_tests;

use crate::config::{AppConfig, NotificationsConfig, ServerConfig, TaskConfig};
use crate::state::AppState;

/// Test configuration with a short task duration so gate/conflict tests
/// stay fast under virtual time.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 8080 },
        task: TaskConfig { duration_ms: 300 },
        notifications: NotificationsConfig { delay_ms: 10 },
    }
}

pub fn setup_test_app() -> axum::Router {
    crate::routes::router(AppState::new(test_config()))
}
