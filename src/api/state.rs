//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{Order, User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{
    CreateUserRequest, PasswordHasher, UpdateUserRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, user_id: i64) -> Result<Option<User>, DomainError>;
    async fn update(&self, user_id: i64, request: UpdateUserRequest)
        -> Result<User, DomainError>;
    async fn delete(&self, user_id: i64) -> Result<bool, DomainError>;
    async fn add_order(&self, user_id: i64, order: Order) -> Result<Order, DomainError>;
    async fn list_orders(&self, user_id: i64) -> Result<Vec<Order>, DomainError>;
    async fn total_price(&self, user_id: i64) -> Result<f64, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static, H: PasswordHasher + 'static> UserServiceTrait
    for UserService<R, H>
{
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, user_id: i64) -> Result<Option<User>, DomainError> {
        UserService::get(self, user_id).await
    }

    async fn update(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        UserService::update(self, user_id, request).await
    }

    async fn delete(&self, user_id: i64) -> Result<bool, DomainError> {
        UserService::delete(self, user_id).await
    }

    async fn add_order(&self, user_id: i64, order: Order) -> Result<Order, DomainError> {
        UserService::add_order(self, user_id, order).await
    }

    async fn list_orders(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        UserService::list_orders(self, user_id).await
    }

    async fn total_price(&self, user_id: i64) -> Result<f64, DomainError> {
        UserService::total_price(self, user_id).await
    }
}

impl AppState {
    /// Create new application state with the provided service
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}
