//! In-memory user document store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::{Order, User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository.
///
/// Documents are kept in a `Vec` because the list endpoint returns
/// users in insertion order. Lookups are linear scans; the collection
/// is small enough that an id index would buy nothing.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, user_id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id() == user_id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username() == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.user_id() == user.user_id()) {
            return Err(DomainError::conflict(format!(
                "User with id '{}' already exists",
                user.user_id()
            )));
        }

        if users.iter().any(|u| u.username() == user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let position = users
            .iter()
            .position(|u| u.user_id() == user.user_id())
            .ok_or_else(|| {
                DomainError::not_found(format!("User '{}' not found", user.user_id()))
            })?;

        // Username uniqueness, excluding the document being replaced
        let username_taken = users
            .iter()
            .any(|u| u.username() == user.username() && u.user_id() != user.user_id());

        if username_taken {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        users[position] = user.clone();

        Ok(user.clone())
    }

    async fn delete(&self, user_id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.user_id() == user_id) {
            Some(position) => {
                users.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn append_order(
        &self,
        user_id: i64,
        order: Order,
    ) -> Result<Option<Order>, DomainError> {
        // Single write lock for the whole append; two concurrent appends
        // to the same user cannot lose each other's write.
        let mut users = self.users.write().await;

        match users.iter_mut().find(|u| u.user_id() == user_id) {
            Some(user) => {
                user.push_order(order.clone());
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }
}
