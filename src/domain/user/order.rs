//! Order line-item owned by a user document

use serde::{Deserialize, Serialize};

/// A single order line-item.
///
/// Orders have no identity of their own; they exist only inside their
/// parent user's order sequence and are identified by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    product_name: String,
    price: f64,
    quantity: i64,
}

impl Order {
    /// Create a new order line-item
    pub fn new(product_name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            quantity,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price of this line-item: unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
