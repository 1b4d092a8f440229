pub mod compatibility_check_response;
pub use self::compatibility_check_response::CompatibilityCheckResponse;
pub mod registered_schema;
pub use self::registered_schema::RegisteredSchema;
pub mod schema_payload;
pub use self::schema_payload::SchemaPayload;
pub mod server_config;
pub use self::server_config::{CompatibilityLevel, ServerConfig};
pub mod version;
pub use self::version::Version;
