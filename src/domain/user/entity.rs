//! User entity and related value objects

use serde::{Deserialize, Serialize};

use super::order::Order;

/// A user's full name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

/// A user's postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

/// User document with an embedded order sequence.
///
/// `user_id` and `username` are unique across the collection; the
/// repository enforces both. Orders are only ever appended, never
/// updated or removed individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique numeric identifier
    user_id: i64,
    /// Unique display name
    username: String,
    /// Password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    full_name: FullName,
    age: i64,
    email: String,
    is_active: bool,
    hobbies: Vec<String>,
    address: Address,
    /// Absent in stored documents until the first append; treated as
    /// equivalent to empty on read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    orders: Vec<Order>,
}

impl User {
    /// Create a new user with an empty order sequence
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: i64,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: FullName,
        age: i64,
        email: impl Into<String>,
        is_active: bool,
        hobbies: Vec<String>,
        address: Address,
    ) -> Self {
        Self {
            user_id,
            username: username.into(),
            password_hash: password_hash.into(),
            full_name,
            age,
            email: email.into(),
            is_active,
            hobbies,
            address,
            orders: Vec::new(),
        }
    }

    // Getters

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // Mutators

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }

    pub fn set_full_name(&mut self, full_name: FullName) {
        self.full_name = full_name;
    }

    pub fn set_age(&mut self, age: i64) {
        self.age = age;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn set_hobbies(&mut self, hobbies: Vec<String>) {
        self.hobbies = hobbies;
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Append an order to the end of the sequence
    pub fn push_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Sum of `price * quantity` over all orders; 0 when there are none
    pub fn total_price(&self) -> f64 {
        self.orders.iter().map(Order::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_full_name() -> FullName {
        FullName {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        }
    }

    fn test_address() -> Address {
        Address {
            street: "S".to_string(),
            city: "C".to_string(),
            country: "D".to_string(),
        }
    }

    fn create_test_user(user_id: i64, username: &str) -> User {
        User::new(
            user_id,
            username,
            "hashed_password",
            test_full_name(),
            20,
            "a@b.com",
            true,
            vec!["chess".to_string()],
            test_address(),
        )
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "Ann");

        assert_eq!(user.user_id(), 1);
        assert_eq!(user.username(), "Ann");
        assert_eq!(user.password_hash(), "hashed_password");
        assert_eq!(user.full_name().first_name, "A");
        assert_eq!(user.age(), 20);
        assert_eq!(user.email(), "a@b.com");
        assert!(user.is_active());
        assert_eq!(user.hobbies(), ["chess".to_string()]);
        assert_eq!(user.address().city, "C");
        assert!(user.orders().is_empty());
    }

    #[test]
    fn test_push_order_preserves_order() {
        let mut user = create_test_user(1, "Ann");

        user.push_order(Order::new("Pen", 2.0, 3));
        user.push_order(Order::new("Notebook", 4.5, 1));

        assert_eq!(user.orders().len(), 2);
        assert_eq!(user.orders()[0].product_name(), "Pen");
        assert_eq!(user.orders()[1].product_name(), "Notebook");
    }

    #[test]
    fn test_total_price() {
        let mut user = create_test_user(1, "Ann");
        assert_eq!(user.total_price(), 0.0);

        user.push_order(Order::new("Pen", 2.0, 3));
        user.push_order(Order::new("Notebook", 4.5, 2));

        assert_eq!(user.total_price(), 15.0);
    }

    #[test]
    fn test_mutators() {
        let mut user = create_test_user(1, "Ann");

        user.set_username("Bea");
        user.set_age(30);
        user.set_is_active(false);
        user.set_hobbies(vec!["go".to_string()]);

        assert_eq!(user.username(), "Bea");
        assert_eq!(user.age(), 30);
        assert!(!user.is_active());
        assert_eq!(user.hobbies(), ["go".to_string()]);
    }

    #[test]
    fn test_serialization_excludes_password() {
        let user = create_test_user(1, "Ann");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_serialization_omits_empty_orders() {
        let user = create_test_user(1, "Ann");

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("orders").is_none());
        assert_eq!(json["userId"], 1);
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn test_deserialization_without_orders() {
        // Documents stored before the first append have no orders field
        let json = r#"{
            "userId": 1,
            "username": "Ann",
            "passwordHash": "h",
            "fullName": {"firstName": "A", "lastName": "B"},
            "age": 20,
            "email": "a@b.com",
            "isActive": true,
            "hobbies": ["chess"],
            "address": {"street": "S", "city": "C", "country": "D"}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.orders().is_empty());
        assert_eq!(user.total_price(), 0.0);
    }
}
