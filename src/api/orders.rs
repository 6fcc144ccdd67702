//! Order endpoints: append, list, and total price

use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Envelope, Json, Path};
use crate::domain::user::Order;

/// Response for listing a user's orders
#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Response carrying the order total
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPriceResponse {
    pub total_price: f64,
}

/// PUT /api/users/{user_id}/orders
///
/// The order payload deserializes straight into the domain [`Order`];
/// all three fields are required.
pub async fn add_order(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(order): Json<Order>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    debug!(user_id, product = %order.product_name(), "Appending order");

    let order = state
        .user_service
        .add_order(user_id, order)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(Envelope::ok("Order created successfully!", order)))
}

/// GET /api/users/{user_id}/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Envelope<OrdersResponse>>, ApiError> {
    debug!(user_id, "Listing orders");

    let orders = state
        .user_service
        .list_orders(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(Envelope::ok(
        "Orders fetched successfully!",
        OrdersResponse { orders },
    )))
}

/// GET /api/users/{user_id}/orders/total-price
pub async fn total_price(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Envelope<TotalPriceResponse>>, ApiError> {
    debug!(user_id, "Calculating total price");

    let total_price = state
        .user_service
        .total_price(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(Envelope::ok(
        "Total price calculated successfully!",
        TotalPriceResponse { total_price },
    )))
}
