//! Uniform response envelope returned by every endpoint

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `{ status, data?, message? }` wrapper around every payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub status: EnvelopeStatus,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }
}

impl<T: DeserializeOwned> ResponseEnvelope<T> {
    /// Unwrap the payload of a success envelope
    ///
    /// A success envelope without `data` is only valid for payload types that
    /// accept `null`, such as `()` for delete and logout calls.
    pub fn into_data(self) -> Result<T, ApiError> {
        match self.status {
            EnvelopeStatus::Error => Err(ApiError::Rejected(self.message.unwrap_or_default())),
            EnvelopeStatus::Success => match self.data {
                Some(data) => Ok(data),
                None => serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                    ApiError::Decode("success envelope is missing its data payload".to_string())
                }),
            },
        }
    }
}

/// Parse a 2xx body into its payload
pub(crate) fn decode_success<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let envelope: ResponseEnvelope<T> = serde_json::from_slice(body)?;
    envelope.into_data()
}

/// Best-effort extraction of the server message from an error body
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ResponseEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
}
