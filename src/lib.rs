//!An asynchronous Rust client for the REST API of the
//![Confluent Schema Registry](https://github.com/confluentinc/schema-registry).
//!
//!## The library
//!
//!`schema-registry-rest` translates a small set of calls into requests against the
//!registry's REST surface, decodes the JSON responses, and surfaces registry-side
//!failures as a typed [`RegistryError`](rest::apis::RegistryError).
//!
//!### Features
//!
//!- Fetch schemas by id, or by subject and version (including `latest`)
//!- List subjects and the versions registered under a subject
//!- Register schemas, look up their registration, and test compatibility
//!- Read and update the global and per-subject compatibility levels
//!- An in-memory [`MockSchemaRegistryClient`](rest::mock_schema_registry_client::MockSchemaRegistryClient)
//!  implementing the same [`Client`](rest::schema_registry_client::Client) trait, for tests
//!
//!Schema documents are plain [`serde_json::Value`]s. On the wire they travel as a JSON
//!string nested inside the request envelope, exactly as the registry expects.
//!
//!## Installation
//!
//!Add this to your `Cargo.toml`:
//!
//!```toml
//![dependencies]
//!schema-registry-rest = { version = "0.1" }
//!```
//!
//!## Usage
//!
//!```no_run
//!use schema_registry_rest::rest::client_config::ClientConfig;
//!use schema_registry_rest::rest::schema_registry_client::{Client, SchemaRegistryClient};
//!
//!# async fn run() -> Result<(), schema_registry_rest::rest::apis::Error> {
//!let client = SchemaRegistryClient::new(ClientConfig::new("localhost"));
//!let id = client
//!    .register_subject_version("test-value", &serde_json::json!({"type": "string"}))
//!    .await?;
//!let subjects = client.get_subjects().await?;
//!println!("registered {id}, subjects: {subjects:?}");
//!# Ok(())
//!# }
//!```

pub mod rest;
