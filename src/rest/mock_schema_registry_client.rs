use crate::rest::apis::error_message::ErrorMessage;
use crate::rest::apis::{Error, RegistryError};
use crate::rest::client_config;
use crate::rest::models::{CompatibilityLevel, RegisteredSchema, Version};
use crate::rest::schema_registry_client::Client;
use crate::rest::wire;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const SUBJECT_NOT_FOUND: i32 = 40401;
const VERSION_NOT_FOUND: i32 = 40402;
const SCHEMA_NOT_FOUND: i32 = 40403;

/// An in-memory registry behind the [`Client`] trait.
///
/// Schema ids are shared across subjects: registering the same document twice yields
/// the same id. Compatibility checks only verify that the subject version exists.
#[derive(Clone)]
pub struct MockSchemaRegistryClient {
    store: Arc<Mutex<SchemaStore>>,
    config: client_config::ClientConfig,
}

impl MockSchemaRegistryClient {
    fn store(&self) -> MutexGuard<'_, SchemaStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Client for MockSchemaRegistryClient {
    fn new(config: client_config::ClientConfig) -> Self {
        MockSchemaRegistryClient {
            store: Arc::new(Mutex::new(SchemaStore::new())),
            config,
        }
    }

    fn config(&self) -> &client_config::ClientConfig {
        &self.config
    }

    async fn get_schema(&self, id: i32) -> Result<Value, Error> {
        let store = self.store();
        let schema = store
            .schemas_by_id
            .get(&id)
            .ok_or_else(|| not_found(SCHEMA_NOT_FOUND, "Schema not found"))?;
        Ok(serde_json::from_str(schema)?)
    }

    async fn get_subjects(&self) -> Result<Vec<String>, Error> {
        let store = self.store();
        Ok(store.subjects.keys().cloned().collect())
    }

    async fn get_subject_version_ids(&self, subject: &str) -> Result<Vec<i32>, Error> {
        let store = self.store();
        let versions = store.versions(subject)?;
        Ok(versions.iter().filter_map(|rs| rs.version).collect())
    }

    async fn get_subject_version(&self, subject: &str, version: Version) -> Result<Value, Error> {
        let store = self.store();
        let rs = store.get_registered_by_version(subject, version)?;
        Ok(rs.to_document()?)
    }

    async fn get_subject_latest_version(&self, subject: &str) -> Result<Value, Error> {
        self.get_subject_version(subject, Version::Latest).await
    }

    async fn register_subject_version(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<Value, Error> {
        let schema = wire::to_string(schema)?;
        let mut store = self.store();
        let rs = store.register(subject, schema);
        Ok(json!({ "id": rs.id }))
    }

    async fn schema_registration_for_subject(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<(i32, i32), Error> {
        let schema = wire::to_string(schema)?;
        let store = self.store();
        let rs = store.get_registered_by_schema(subject, &schema)?;
        Ok(rs.registration()?)
    }

    async fn schema_is_registered_for_subject(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<bool, Error> {
        match self.schema_registration_for_subject(subject, schema).await {
            Ok(_) => Ok(true),
            Err(Error::Registry(e)) if e.status == StatusCode::NOT_FOUND => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn schema_is_compatible_with_subject_version(
        &self,
        subject: &str,
        version: Version,
        schema: &Value,
    ) -> Result<bool, Error> {
        wire::to_string(schema)?;
        let store = self.store();
        store.get_registered_by_version(subject, version)?;
        Ok(true)
    }

    async fn set_global_compatibility_level(
        &self,
        level: CompatibilityLevel,
    ) -> Result<(), Error> {
        self.store().global_level = level;
        Ok(())
    }

    async fn get_global_compatibility_level(&self) -> Result<CompatibilityLevel, Error> {
        Ok(self.store().global_level)
    }

    async fn set_subject_compatibility_level(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<(), Error> {
        self.store()
            .subject_levels
            .insert(subject.to_string(), level);
        Ok(())
    }

    async fn get_subject_compatibility_level(
        &self,
        subject: &str,
    ) -> Result<CompatibilityLevel, Error> {
        let store = self.store();
        Ok(store
            .subject_levels
            .get(subject)
            .copied()
            .unwrap_or(store.global_level))
    }
}

fn not_found(code: i32, message: &str) -> Error {
    Error::Registry(RegistryError::new(
        StatusCode::NOT_FOUND,
        ErrorMessage::new(code, message),
    ))
}

struct SchemaStore {
    subjects: BTreeMap<String, Vec<RegisteredSchema>>,
    schema_ids: HashMap<String, i32>,
    schemas_by_id: HashMap<i32, String>,
    next_id: i32,
    global_level: CompatibilityLevel,
    subject_levels: HashMap<String, CompatibilityLevel>,
}

impl SchemaStore {
    fn new() -> Self {
        SchemaStore {
            subjects: BTreeMap::new(),
            schema_ids: HashMap::new(),
            schemas_by_id: HashMap::new(),
            next_id: 1,
            global_level: CompatibilityLevel::default(),
            subject_levels: HashMap::new(),
        }
    }

    fn register(&mut self, subject: &str, schema: String) -> RegisteredSchema {
        if let Ok(rs) = self.get_registered_by_schema(subject, &schema) {
            return rs.clone();
        }
        let id = match self.schema_ids.get(&schema) {
            Some(id) => *id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.schema_ids.insert(schema.clone(), id);
                self.schemas_by_id.insert(id, schema.clone());
                id
            }
        };
        let versions = self.subjects.entry(subject.to_string()).or_default();
        let version = versions.last().and_then(|rs| rs.version).unwrap_or(0) + 1;
        let rs = RegisteredSchema {
            id: Some(id),
            subject: Some(subject.to_string()),
            version: Some(version),
            schema: Some(schema),
        };
        versions.push(rs.clone());
        rs
    }

    fn versions(&self, subject: &str) -> Result<&Vec<RegisteredSchema>, Error> {
        self.subjects
            .get(subject)
            .ok_or_else(|| not_found(SUBJECT_NOT_FOUND, "Subject not found"))
    }

    fn get_registered_by_version(
        &self,
        subject: &str,
        version: Version,
    ) -> Result<&RegisteredSchema, Error> {
        let versions = self.versions(subject)?;
        let rs = match version {
            Version::Latest => versions.last(),
            Version::Number(v) => versions.iter().find(|rs| rs.version == Some(v)),
        };
        rs.ok_or_else(|| not_found(VERSION_NOT_FOUND, "Version not found"))
    }

    fn get_registered_by_schema(
        &self,
        subject: &str,
        schema: &str,
    ) -> Result<&RegisteredSchema, Error> {
        let versions = self.versions(subject)?;
        versions
            .iter()
            .find(|rs| rs.schema.as_deref() == Some(schema))
            .ok_or_else(|| not_found(SCHEMA_NOT_FOUND, "Schema not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MockSchemaRegistryClient {
        MockSchemaRegistryClient::new(client_config::ClientConfig::default())
    }

    #[tokio::test]
    async fn test_register_and_fetch() {
        let client = client();
        let schema = json!({"type": "record", "name": "User", "fields": []});
        let resp = client
            .register_subject_version("users-value", &schema)
            .await
            .unwrap();
        assert_eq!(resp, json!({"id": 1}));
        assert_eq!(client.get_schema(1).await.unwrap(), schema);
        assert_eq!(
            client
                .get_subject_version("users-value", Version::Number(1))
                .await
                .unwrap(),
            schema
        );
        assert_eq!(client.get_subjects().await.unwrap(), vec!["users-value"]);
    }

    #[tokio::test]
    async fn test_versions_increment() {
        let client = client();
        let v1 = json!({"type": "string"});
        let v2 = json!({"type": "bytes"});
        client.register_subject_version("test", &v1).await.unwrap();
        client.register_subject_version("test", &v2).await.unwrap();
        // idempotent
        client.register_subject_version("test", &v1).await.unwrap();

        assert_eq!(
            client.get_subject_version_ids("test").await.unwrap(),
            vec![1, 2]
        );
        assert_eq!(client.get_subject_latest_version("test").await.unwrap(), v2);
        assert_eq!(
            client
                .schema_registration_for_subject("test", &v2)
                .await
                .unwrap(),
            (2, 2)
        );
    }

    #[tokio::test]
    async fn test_schema_id_shared_across_subjects() {
        let client = client();
        let schema = json!({"type": "string"});
        client.register_subject_version("a", &schema).await.unwrap();
        let resp = client.register_subject_version("b", &schema).await.unwrap();
        assert_eq!(resp, json!({"id": 1}));
        assert_eq!(
            client
                .schema_registration_for_subject("b", &schema)
                .await
                .unwrap(),
            (1, 1)
        );
    }

    #[tokio::test]
    async fn test_not_found_codes() {
        let client = client();
        let err = client.get_schema(42).await.unwrap_err();
        assert_eq!(err.registry().and_then(|e| e.code()), Some(40403));

        let err = client.get_subject_version_ids("nope").await.unwrap_err();
        assert_eq!(err.registry().and_then(|e| e.code()), Some(40401));

        client
            .register_subject_version("test", &json!({"type": "string"}))
            .await
            .unwrap();
        let err = client
            .get_subject_version("test", Version::Number(9))
            .await
            .unwrap_err();
        assert_eq!(err.registry().and_then(|e| e.code()), Some(40402));
    }

    #[tokio::test]
    async fn test_is_registered() {
        let client = client();
        let schema = json!({"type": "string"});
        assert!(
            !client
                .schema_is_registered_for_subject("test", &schema)
                .await
                .unwrap()
        );
        client.register_subject_version("test", &schema).await.unwrap();
        assert!(
            client
                .schema_is_registered_for_subject("test", &schema)
                .await
                .unwrap()
        );
        assert!(
            !client
                .schema_is_registered_for_subject("test", &json!({"type": "int"}))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_compatibility() {
        let client = client();
        let schema = json!({"type": "string"});
        client.register_subject_version("test", &schema).await.unwrap();
        assert!(
            client
                .schema_is_compatible_with_subject_version("test", Version::Latest, &schema)
                .await
                .unwrap()
        );
        assert!(
            client
                .schema_is_compatible_with_subject_version("test", 7.into(), &schema)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_compatibility_levels() {
        let client = client();
        assert_eq!(
            client.get_global_compatibility_level().await.unwrap(),
            CompatibilityLevel::Backward
        );
        client
            .set_global_compatibility_level(CompatibilityLevel::Full)
            .await
            .unwrap();
        assert_eq!(
            client.get_subject_compatibility_level("test").await.unwrap(),
            CompatibilityLevel::Full
        );
        client
            .set_subject_compatibility_level("test", CompatibilityLevel::None)
            .await
            .unwrap();
        assert_eq!(
            client.get_subject_compatibility_level("test").await.unwrap(),
            CompatibilityLevel::None
        );
        assert_eq!(
            client.get_global_compatibility_level().await.unwrap(),
            CompatibilityLevel::Full
        );
    }
}
