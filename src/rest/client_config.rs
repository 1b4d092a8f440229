use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,

    /// Applied to each request; `None` leaves timeouts to `client`.
    pub request_timeout: Option<Duration>,

    pub client: reqwest::Client,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> ClientConfig {
        ClientConfig {
            host: host.into(),
            ..ClientConfig::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> ClientConfig {
        self.port = port;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> ClientConfig {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> ClientConfig {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: "localhost".to_owned(),
            port: DEFAULT_PORT,
            request_timeout: None,
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = ClientConfig::new("registry.example.com");
        assert_eq!(config.port, 8081);
        assert_eq!(config.base_url(), "http://registry.example.com:8081");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::new("10.0.0.5")
            .with_port(18081)
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url(), "http://10.0.0.5:18081");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}
