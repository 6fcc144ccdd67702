//! HTTP API layer

pub mod health;
pub mod orders;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::create_router_with_state;
