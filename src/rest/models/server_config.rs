use serde::{Deserialize, Serialize};
use std::fmt;

/// Config : Compatibility configuration, global or per subject
///
/// `PUT /config` echoes `compatibility`, while `GET /config` answers with
/// `compatibilityLevel`.
#[derive(Clone, Default, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(rename = "compatibility", skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityLevel>,
    #[serde(rename = "compatibilityLevel", skip_serializing_if = "Option::is_none")]
    pub compatibility_level: Option<CompatibilityLevel>,
}

impl ServerConfig {
    /// Config
    pub fn new(compatibility: CompatibilityLevel) -> ServerConfig {
        ServerConfig {
            compatibility: Some(compatibility),
            compatibility_level: None,
        }
    }

    pub fn level(&self) -> Option<CompatibilityLevel> {
        self.compatibility_level.or(self.compatibility)
    }
}

/// Compatibility Level
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default,
)]
pub enum CompatibilityLevel {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "FULL")]
    Full,
    #[serde(rename = "BACKWARD")]
    #[default]
    Backward,
    #[serde(rename = "FORWARD")]
    Forward,
}

impl CompatibilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLevel::None => "NONE",
            CompatibilityLevel::Full => "FULL",
            CompatibilityLevel::Backward => "BACKWARD",
            CompatibilityLevel::Forward => "FORWARD",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
