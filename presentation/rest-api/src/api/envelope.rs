use poem_openapi::Object;
use poem_openapi::types::{ParseFromJSON, ToJSON};

/// Uniform wrapper returned by every endpoint, success and failure alike.
#[derive(Debug, Object)]
pub struct Envelope<T: ParseFromJSON + ToJSON> {
    /// "success" or "error"
    pub status: String,
    /// Payload; null on failures and on successes with nothing to return
    pub data: Option<T>,
    /// Code-style outcome identifier
    pub message: String,
}

impl<T: ParseFromJSON + ToJSON> Envelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: message.into(),
        }
    }

    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            message: message.into(),
        }
    }
}
