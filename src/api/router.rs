use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::orders;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User and order endpoints
        .merge(users_router())
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Route table for the user collection
fn users_router() -> Router<AppState> {
    Router::new()
        .route("/api/users/", post(users::create_user))
        .route("/api/users/", get(users::list_users))
        .route("/api/users/{user_id}", get(users::get_user))
        .route("/api/users/{user_id}", put(users::update_user))
        .route("/api/users/{user_id}", delete(users::delete_user))
        .route("/api/users/{user_id}/orders", put(orders::add_order))
        .route("/api/users/{user_id}/orders", get(orders::list_orders))
        .route(
            "/api/users/{user_id}/orders/total-price",
            get(orders::total_price),
        )
}
