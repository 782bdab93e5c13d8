use crate::draft::FieldKey;
use thiserror::Error;

/// Form-level validation failures. These block submission before any
/// request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(FieldKey),

    #[error("{0} must be an absolute URL")]
    InvalidUrl(FieldKey),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Failures talking to the backend that never produced a usable envelope.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The client could not be built from its options; nothing was sent.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl TransportError {
    /// Returns `true` if the request never got a response.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_messages_use_element_ids() {
        assert_eq!(
            FormError::Required(FieldKey::AcsUrl).to_string(),
            "acsUrl is required"
        );
        assert_eq!(
            FormError::InvalidUrl(FieldKey::EntityId).to_string(),
            "entityId must be an absolute URL"
        );
    }

    #[test]
    fn test_json_errors_become_decode_errors() {
        let err: TransportError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, TransportError::Decode(_)));
        assert!(!err.is_network());
    }
}
