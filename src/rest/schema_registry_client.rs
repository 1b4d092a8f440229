use crate::rest::apis::{self, Error, urlencode};
use crate::rest::models::{
    CompatibilityCheckResponse, CompatibilityLevel, RegisteredSchema, SchemaPayload,
    ServerConfig, Version,
};
use crate::rest::{client_config, rest_service};
use log::debug;
use reqwest::StatusCode;
use serde::de::Error as _;
use serde_json::Value;

#[trait_variant::make(Send)]
pub trait Client {
    fn new(config: client_config::ClientConfig) -> Self;
    fn config(&self) -> &client_config::ClientConfig;
    /// Fetches the schema document registered under `id`.
    async fn get_schema(&self, id: i32) -> Result<Value, Error>;
    async fn get_subjects(&self) -> Result<Vec<String>, Error>;
    async fn get_subject_version_ids(&self, subject: &str) -> Result<Vec<i32>, Error>;
    async fn get_subject_version(&self, subject: &str, version: Version) -> Result<Value, Error>;
    async fn get_subject_latest_version(&self, subject: &str) -> Result<Value, Error>;
    /// Registers `schema` under `subject`, returning the registry's response as is.
    async fn register_subject_version(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<Value, Error>;
    /// Looks up the `(schema id, version)` of `schema` under `subject`.
    async fn schema_registration_for_subject(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<(i32, i32), Error>;
    /// `false` when the registry answers 404, instead of an error.
    async fn schema_is_registered_for_subject(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<bool, Error>;
    async fn schema_is_compatible_with_subject_version(
        &self,
        subject: &str,
        version: Version,
        schema: &Value,
    ) -> Result<bool, Error>;
    async fn set_global_compatibility_level(
        &self,
        level: CompatibilityLevel,
    ) -> Result<(), Error>;
    async fn get_global_compatibility_level(&self) -> Result<CompatibilityLevel, Error>;
    async fn set_subject_compatibility_level(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<(), Error>;
    async fn get_subject_compatibility_level(
        &self,
        subject: &str,
    ) -> Result<CompatibilityLevel, Error>;
}

/// Client for a registry reachable at `http://{host}:{port}`.
///
/// Holds no state besides its configuration; every call is a single HTTP exchange.
#[derive(Clone, Debug)]
pub struct SchemaRegistryClient {
    rest_service: rest_service::RestService,
}

impl Client for SchemaRegistryClient {
    fn new(config: client_config::ClientConfig) -> Self {
        SchemaRegistryClient {
            rest_service: rest_service::RestService::new(config),
        }
    }

    fn config(&self) -> &client_config::ClientConfig {
        self.rest_service.config()
    }

    async fn get_schema(&self, id: i32) -> Result<Value, Error> {
        let url = format!("/schemas/ids/{}", id);
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::GET, None)
            .await?;
        let content = apis::response_content(resp).await?;
        let rs: RegisteredSchema = serde_json::from_str(&content)?;
        Ok(rs.to_document()?)
    }

    async fn get_subjects(&self) -> Result<Vec<String>, Error> {
        let url = "/subjects";
        let resp = self
            .rest_service
            .send_request(url, reqwest::Method::GET, None)
            .await?;
        let content = apis::response_content(resp).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn get_subject_version_ids(&self, subject: &str) -> Result<Vec<i32>, Error> {
        let url = format!("/subjects/{}/versions", urlencode(subject));
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::GET, None)
            .await?;
        let content = apis::response_content(resp).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn get_subject_version(&self, subject: &str, version: Version) -> Result<Value, Error> {
        let url = format!("/subjects/{}/versions/{}", urlencode(subject), version);
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::GET, None)
            .await?;
        let content = apis::response_content(resp).await?;
        let rs: RegisteredSchema = serde_json::from_str(&content)?;
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
        let url = format!("/subjects/{}/versions", urlencode(subject));
        let body = SchemaPayload::from_document(schema)?.to_body()?;
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::POST, Some(&body))
            .await?;
        let content = apis::response_content(resp).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn schema_registration_for_subject(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<(i32, i32), Error> {
        let url = format!("/subjects/{}", urlencode(subject));
        let body = SchemaPayload::from_document(schema)?.to_body()?;
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::POST, Some(&body))
            .await?;
        let content = apis::response_content(resp).await?;
        let rs: RegisteredSchema = serde_json::from_str(&content)?;
        Ok(rs.registration()?)
    }

    async fn schema_is_registered_for_subject(
        &self,
        subject: &str,
        schema: &Value,
    ) -> Result<bool, Error> {
        let url = format!("/subjects/{}", urlencode(subject));
        let body = SchemaPayload::from_document(schema)?.to_body()?;
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::POST, Some(&body))
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            debug!("schema not registered under subject {}", subject);
            return Ok(false);
        }
        apis::response_content(resp).await?;
        Ok(true)
    }

    async fn schema_is_compatible_with_subject_version(
        &self,
        subject: &str,
        version: Version,
        schema: &Value,
    ) -> Result<bool, Error> {
        let url = format!(
            "/compatibility/subjects/{}/versions/{}",
            urlencode(subject),
            version
        );
        let body = SchemaPayload::from_document(schema)?.to_body()?;
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::POST, Some(&body))
            .await?;
        let content = apis::response_content(resp).await?;
        let result: CompatibilityCheckResponse = serde_json::from_str(&content)?;
        Ok(result.is_compatible)
    }

    async fn set_global_compatibility_level(
        &self,
        level: CompatibilityLevel,
    ) -> Result<(), Error> {
        let url = "/config";
        let body = serde_json::to_string(&ServerConfig::new(level))?;
        let resp = self
            .rest_service
            .send_request(url, reqwest::Method::PUT, Some(&body))
            .await?;
        apis::response_content(resp).await?;
        Ok(())
    }

    async fn get_global_compatibility_level(&self) -> Result<CompatibilityLevel, Error> {
        let url = "/config";
        let resp = self
            .rest_service
            .send_request(url, reqwest::Method::GET, None)
            .await?;
        let content = apis::response_content(resp).await?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        level_of(&config)
    }

    async fn set_subject_compatibility_level(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<(), Error> {
        let url = format!("/config/{}", urlencode(subject));
        let body = serde_json::to_string(&ServerConfig::new(level))?;
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::PUT, Some(&body))
            .await?;
        apis::response_content(resp).await?;
        Ok(())
    }

    async fn get_subject_compatibility_level(
        &self,
        subject: &str,
    ) -> Result<CompatibilityLevel, Error> {
        let url = format!("/config/{}", urlencode(subject));
        let resp = self
            .rest_service
            .send_request(&url, reqwest::Method::GET, None)
            .await?;
        let content = apis::response_content(resp).await?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        level_of(&config)
    }
}

fn level_of(config: &ServerConfig) -> Result<CompatibilityLevel, Error> {
    config
        .level()
        .ok_or_else(|| Error::Json(serde_json::Error::missing_field("compatibilityLevel")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::client_config::ClientConfig;

    #[test]
    fn test_config_is_kept() {
        let client = SchemaRegistryClient::new(ClientConfig::new("registry").with_port(9091));
        assert_eq!(client.config().host, "registry");
        assert_eq!(client.config().port, 9091);
    }

    #[test]
    fn test_level_of_missing_field() {
        let err = level_of(&ServerConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 1.
        let client = SchemaRegistryClient::new(ClientConfig::new("127.0.0.1").with_port(1));
        let err = client.get_subjects().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.registry().is_none());
    }
}
