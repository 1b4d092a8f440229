use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RegisteredSchema : Registered schema
#[derive(Clone, Default, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct RegisteredSchema {
    /// Unique identifier of the schema
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Subject
    #[serde(rename = "subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Version number
    #[serde(rename = "version", skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// Schema definition string
    #[serde(rename = "schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl RegisteredSchema {
    pub fn new(id: i32) -> RegisteredSchema {
        RegisteredSchema {
            id: Some(id),
            subject: None,
            version: None,
            schema: None,
        }
    }

    /// Parses the schema string into a document.
    pub fn to_document(&self) -> Result<Value, serde_json::Error> {
        match &self.schema {
            Some(schema) => serde_json::from_str(schema),
            None => Err(serde_json::Error::missing_field("schema")),
        }
    }

    /// The `(schema id, version)` pair of this registration.
    pub fn registration(&self) -> Result<(i32, i32), serde_json::Error> {
        let id = self.id.ok_or_else(|| serde_json::Error::missing_field("id"))?;
        let version = self
            .version
            .ok_or_else(|| serde_json::Error::missing_field("version"))?;
        Ok((id, version))
    }
}
