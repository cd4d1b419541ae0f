// src/presentation/http/responses.rs
use serde::Serialize;

/// Success envelope shared by every endpoint: a message plus an optional
/// typed payload. `data` is omitted entirely when there is none.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
