use serde::{Deserialize, Serialize};

/// ErrorMessage : Error envelope returned by the registry
#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Error code
    #[serde(rename = "error_code", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    /// Detailed error message
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorMessage {
    /// Error message
    pub fn new(error_code: i32, message: &str) -> ErrorMessage {
        ErrorMessage {
            error_code: Some(error_code),
            message: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registry_envelope() {
        let msg: ErrorMessage =
            serde_json::from_str(r#"{"error_code": 40403, "message": "Schema not found"}"#)
                .unwrap();
        assert_eq!(msg, ErrorMessage::new(40403, "Schema not found"));
    }

    #[test]
    fn test_parse_partial_envelope() {
        let msg: ErrorMessage = serde_json::from_str(r#"{"message": "oops"}"#).unwrap();
        assert_eq!(msg.error_code, None);
        assert_eq!(msg.message.as_deref(), Some("oops"));
    }
}
