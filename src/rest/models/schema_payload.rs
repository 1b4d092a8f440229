use crate::rest::wire;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SchemaPayload : Request envelope carrying a schema document
///
/// The `schema` field holds the document encoded as a JSON string, so the body sent
/// for `{"type": "string"}` is `{"schema": "{\"type\": \"string\"}"}`.
#[derive(Clone, Default, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SchemaPayload {
    /// Schema definition string
    #[serde(rename = "schema")]
    pub schema: String,
}

impl SchemaPayload {
    pub fn new(schema: String) -> SchemaPayload {
        SchemaPayload { schema }
    }

    pub fn from_document(document: &Value) -> Result<SchemaPayload, serde_json::Error> {
        Ok(SchemaPayload::new(wire::to_string(document)?))
    }

    pub fn to_document(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.schema)
    }

    /// The request body, in wire layout.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        wire::to_string(self)
    }
}
