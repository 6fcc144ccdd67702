//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use super::order::Order;
use crate::domain::DomainError;

/// Repository trait for the user document collection.
///
/// Documents are keyed by unique `user_id`; `username` is unique as a
/// secondary constraint. Orders live inside their parent document, so
/// `append_order` is part of this trait rather than a separate
/// collection: implementations must make the append atomic with respect
/// to concurrent appends on the same user.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn get(&self, user_id: i64) -> Result<Option<User>, DomainError>;

    /// Get a user by username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user; fails with a conflict when `user_id` or
    /// `username` is already taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user document
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user; returns whether a document was removed
    async fn delete(&self, user_id: i64) -> Result<bool, DomainError>;

    /// List all users in storage order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Append an order to a user's order sequence in one atomic step.
    /// Returns the appended order, or `None` when the user does not
    /// exist.
    async fn append_order(&self, user_id: i64, order: Order)
        -> Result<Option<Order>, DomainError>;

    /// Check if a user id exists
    async fn exists(&self, user_id: i64) -> Result<bool, DomainError> {
        Ok(self.get(user_id).await?.is_some())
    }

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }
}
