pub mod error_message;

use crate::rest::apis::error_message::ErrorMessage;
use log::debug;
use reqwest::StatusCode;
use std::fmt;

/// A failure reported by the registry: any response with status 400 or above.
///
/// `code` and `message` come from the registry's `{"error_code": .., "message": ..}`
/// envelope. Both are `None` when the body is not that JSON document; the raw body
/// is always kept in `content`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryError {
    pub status: StatusCode,
    pub code: Option<i32>,
    pub message: Option<String>,
    pub content: String,
}

impl RegistryError {
    pub fn from_response(status: StatusCode, content: String) -> RegistryError {
        let entity: Option<ErrorMessage> = serde_json::from_str(&content).ok();
        let (code, message) = match entity {
            Some(entity) => (entity.error_code, entity.message),
            None => (None, None),
        };
        RegistryError {
            status,
            code,
            message,
            content,
        }
    }

    pub fn new(status: StatusCode, entity: ErrorMessage) -> RegistryError {
        let content = serde_json::to_string(&entity).unwrap_or_default();
        RegistryError {
            status,
            code: entity.error_code,
            message: entity.message,
            content,
        }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "registry error (status {}, code ", self.status)?;
        match self.code {
            Some(code) => write!(f, "{code}")?,
            None => write!(f, "none")?,
        }
        write!(f, "): {}", self.message().unwrap_or("no message"))
    }
}

impl std::error::Error for RegistryError {}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// The registry-reported failure, if this error came from a response.
    pub fn registry(&self) -> Option<&RegistryError> {
        match self {
            Error::Registry(e) => Some(e),
            _ => None,
        }
    }
}

/// Percent-encodes a single path segment.
pub fn urlencode<T: AsRef<str>>(s: T) -> String {
    url::form_urlencoded::byte_serialize(s.as_ref().as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Reads the body of `resp`, turning any status of 400 or above into a [`RegistryError`].
pub(crate) async fn response_content(resp: reqwest::Response) -> Result<String, Error> {
    let status = resp.status();
    let content = resp.text().await?;
    if status.as_u16() < 400 {
        Ok(content)
    } else {
        let error = RegistryError::from_response(status, content);
        debug!(
            "registry returned {}: code={:?} message={:?}",
            status, error.code, error.message
        );
        Err(Error::Registry(error))
    }
}
