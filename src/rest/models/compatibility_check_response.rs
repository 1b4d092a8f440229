use serde::{Deserialize, Serialize};

/// CompatibilityCheckResponse : Compatibility check response
#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityCheckResponse {
    /// Whether the compared schemas are compatible
    #[serde(rename = "is_compatible")]
    pub is_compatible: bool,
    /// Error messages
    #[serde(rename = "messages", default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl CompatibilityCheckResponse {
    pub fn new(is_compatible: bool) -> CompatibilityCheckResponse {
        CompatibilityCheckResponse {
            is_compatible,
            messages: Vec::new(),
        }
    }
}
