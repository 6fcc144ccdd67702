//! User & Orders API
//!
//! A CRUD service for user records with embedded order line-items:
//! - Typed payload validation with first-violation error messages
//! - Argon2 password hashing behind an injectable trait
//! - An in-memory document store keyed by unique user id and username
//! - Uniform `{success, message, data}` response envelopes

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, UserService};

/// Create the application state with all services initialized
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(Argon2Hasher::new());
    let user_service = Arc::new(UserService::new(repository, hasher));

    AppState::new(user_service)
}
