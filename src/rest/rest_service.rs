use crate::rest::apis::Error;
use crate::rest::client_config;
use log::{debug, trace};
use reqwest::header;
use url::Url;

/// Content type of every request body sent to the registry.
pub const CONTENT_TYPE: &str = "application/vnd.schemaregistry.v1+json";

#[derive(Debug, Clone)]
pub struct RestService {
    config: client_config::ClientConfig,
}

impl RestService {
    pub fn new(config: client_config::ClientConfig) -> Self {
        RestService { config }
    }

    pub fn config(&self) -> &client_config::ClientConfig {
        &self.config
    }

    /// `path` must already have its segments encoded.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        let url = format!("{}{}", self.config.base_url(), path);
        Url::parse(&url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))
    }

    pub async fn send_request(
        &self,
        path: &str,
        method: reqwest::Method,
        body: Option<&str>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;
        debug!("{} {}", method, url);
        let mut request = self.config.client.request(method.clone(), url.clone());
        if let Some(timeout) = self.config.request_timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, CONTENT_TYPE)
                .body(body.to_string());
        }
        let response = request.send().await?;
        trace!("{} {} returned {}", method, url, response.status());
        Ok(response)
    }
}
