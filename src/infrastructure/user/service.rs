//! User service: validation, hashing, and persistence orchestration

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::user::{validate_username, Address, FullName, Order, User, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new user. Every field is required; the JSON
/// layer rejects payloads that do not match this shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub is_active: bool,
    pub hobbies: Vec<String>,
    pub address: Address,
}

/// Partial-update request. Absent fields leave the stored document
/// untouched; a present password is re-hashed before the merge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<FullName>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub hobbies: Option<Vec<String>>,
    pub address: Option<Address>,
}

/// User service for record and order management
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(&request.password)?;

        let user = User::new(
            request.user_id,
            request.username,
            password_hash,
            request.full_name,
            request.age,
            request.email,
            request.is_active,
            request.hobbies,
            request.address,
        );

        // The repository enforces id and username uniqueness; a conflict
        // bubbles up as a generic failure.
        self.repository.create(user).await
    }

    /// List all users in storage order
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by id
    pub async fn get(&self, user_id: i64) -> Result<Option<User>, DomainError> {
        self.repository.get(user_id).await
    }

    /// Apply a partial update to a user: only the fields present in the
    /// request are overwritten
    pub async fn update(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        if let Some(username) = request.username {
            validate_username(&username).map_err(|e| DomainError::validation(e.to_string()))?;
            user.set_username(username);
        }

        if let Some(password) = request.password {
            let password_hash = self.hasher.hash(&password)?;
            user.set_password_hash(password_hash);
        }

        if let Some(full_name) = request.full_name {
            user.set_full_name(full_name);
        }

        if let Some(age) = request.age {
            user.set_age(age);
        }

        if let Some(email) = request.email {
            user.set_email(email);
        }

        if let Some(is_active) = request.is_active {
            user.set_is_active(is_active);
        }

        if let Some(hobbies) = request.hobbies {
            user.set_hobbies(hobbies);
        }

        if let Some(address) = request.address {
            user.set_address(address);
        }

        self.repository.update(&user).await
    }

    /// Delete a user; returns whether a document was removed
    pub async fn delete(&self, user_id: i64) -> Result<bool, DomainError> {
        self.repository.delete(user_id).await
    }

    /// Append an order to a user's order sequence
    pub async fn add_order(&self, user_id: i64, order: Order) -> Result<Order, DomainError> {
        self.repository
            .append_order(user_id, order)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))
    }

    /// List a user's orders (possibly empty)
    pub async fn list_orders(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        let user = self
            .repository
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        Ok(user.orders().to_vec())
    }

    /// Sum of `price * quantity` over a user's orders
    pub async fn total_price(&self, user_id: i64) -> Result<f64, DomainError> {
        let user = self
            .repository
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        Ok(user.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::password::FakeHasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService<InMemoryUserRepository, FakeHasher> {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(FakeHasher);
        UserService::new(repository, hasher)
    }

    fn make_request(user_id: i64, username: &str) -> CreateUserRequest {
        CreateUserRequest {
            user_id,
            username: username.to_string(),
            password: "x".to_string(),
            full_name: FullName {
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            },
            age: 20,
            email: "a@b.com".to_string(),
            is_active: true,
            hobbies: vec!["chess".to_string()],
            address: Address {
                street: "S".to_string(),
                city: "C".to_string(),
                country: "D".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let user = service.create(make_request(1, "Ann")).await.unwrap();

        assert_eq!(user.user_id(), 1);
        assert_eq!(user.username(), "Ann");
        assert_eq!(user.password_hash(), "fake-hash:x");
        assert!(user.orders().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_invalid_username() {
        let service = create_service();

        let result = service.create(make_request(1, "ann")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let result = service.create(make_request(1, "Bea")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let result = service.create(make_request(2, "Ann")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_partial_update_merges_present_fields() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let request = UpdateUserRequest {
            age: Some(30),
            email: Some("new@b.com".to_string()),
            ..Default::default()
        };

        let updated = service.update(1, request).await.unwrap();

        // Present fields overwritten
        assert_eq!(updated.age(), 30);
        assert_eq!(updated.email(), "new@b.com");

        // Absent fields untouched
        assert_eq!(updated.username(), "Ann");
        assert!(updated.is_active());
        assert_eq!(updated.hobbies(), ["chess".to_string()]);
        assert_eq!(updated.password_hash(), "fake-hash:x");
    }

    #[tokio::test]
    async fn test_update_rehashes_present_password() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let request = UpdateUserRequest {
            password: Some("new-secret".to_string()),
            ..Default::default()
        };

        let updated = service.update(1, request).await.unwrap();
        assert_eq!(updated.password_hash(), "fake-hash:new-secret");
    }

    #[tokio::test]
    async fn test_update_validates_username() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let request = UpdateUserRequest {
            username: Some("bea".to_string()),
            ..Default::default()
        };

        let result = service.update(1, request).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = create_service();

        let result = service.update(99, UpdateUserRequest::default()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        assert!(service.delete(1).await.unwrap());
        assert!(service.get(1).await.unwrap().is_none());
        assert!(!service.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_order_and_list() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let order = service
            .add_order(1, Order::new("Pen", 2.0, 3))
            .await
            .unwrap();
        assert_eq!(order.product_name(), "Pen");

        let orders = service.list_orders(1).await.unwrap();
        assert_eq!(orders.len(), 1);
    }

    #[tokio::test]
    async fn test_add_order_missing_user() {
        let service = create_service();

        let result = service.add_order(99, Order::new("Pen", 2.0, 3)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_orders_empty() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let orders = service.list_orders(1).await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_total_price_sums_line_totals() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        service.add_order(1, Order::new("Pen", 2.0, 3)).await.unwrap();
        service
            .add_order(1, Order::new("Notebook", 4.5, 2))
            .await
            .unwrap();

        let total = service.total_price(1).await.unwrap();
        assert_eq!(total, 15.0);
    }

    #[tokio::test]
    async fn test_total_price_no_orders() {
        let service = create_service();

        service.create(make_request(1, "Ann")).await.unwrap();

        let total = service.total_price(1).await.unwrap();
        assert_eq!(total, 0.0);
    }

    #[tokio::test]
    async fn test_total_price_missing_user() {
        let service = create_service();

        let result = service.total_price(99).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_update_request_deserializes_partial_payload() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"age": 25}"#).unwrap();

        assert_eq!(request.age, Some(25));
        assert!(request.username.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn test_create_request_rejects_missing_field() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"userId": 1}"#);
        assert!(result.is_err());
    }
}
