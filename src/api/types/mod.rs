//! Envelope and error types shared by all endpoints

pub mod envelope;
pub mod error;
pub mod json;
pub mod path;

pub use envelope::Envelope;
pub use error::{ApiError, ApiErrorBody, ApiErrorDetail};
pub use json::Json;
pub use path::Path;
