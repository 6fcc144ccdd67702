//! User infrastructure module
//!
//! Implementations behind the user domain: password hashing with
//! Argon2, the in-memory document store, and the user service.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};

#[cfg(test)]
pub use password::FakeHasher;
