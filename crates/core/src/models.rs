use crate::error::{Result, TransportError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Federated SAML app as returned by the creation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlFederationApp {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tenant: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub acs_url: String,
    #[serde(default)]
    pub entity_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Envelope every admin endpoint answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// Body carried a `data` payload
    Data(T),
    /// Body carried an `error` payload
    Error(ApiErrorBody),
    /// Body was a JSON object with neither key
    Unrecognized,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a raw response body.
    ///
    /// `error` is checked before `data`. A body that is not JSON, or whose
    /// payload does not match the expected shape, is a decode error.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(TransportError::Decode(
                "response body is not a JSON object".to_string(),
            ));
        };

        if let Some(error) = map.remove("error") {
            return Ok(Self::Error(serde_json::from_value(error)?));
        }

        if let Some(data) = map.remove("data") {
            return Ok(Self::Data(serde_json::from_value(data)?));
        }

        Ok(Self::Unrecognized)
    }
}
