//! User domain
//!
//! This module provides the user aggregate and its embedded order
//! line-items, payload validation, and the repository trait the
//! document store implements.

mod entity;
mod order;
mod repository;
mod validation;

pub use entity::{Address, FullName, User};
pub use order::Order;
pub use repository::UserRepository;
pub use validation::{validate_username, UserValidationError};
