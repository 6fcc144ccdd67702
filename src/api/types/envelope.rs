//! Uniform response envelope

use serde::{Deserialize, Serialize};

/// Wrapper every endpoint responds with: `{success, message, data}`.
/// `data` is always serialized, as `null` when there is no payload
/// (the delete endpoint's contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful envelope with a null payload
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serialization() {
        let envelope = Envelope::ok("User fetched successfully!", 42);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User fetched successfully!");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_empty_envelope_serializes_null_data() {
        let envelope: Envelope<()> = Envelope::ok_empty("User deleted successfully!");
        let json = serde_json::to_string(&envelope).unwrap();

        assert!(json.contains("\"data\":null"));
    }
}
