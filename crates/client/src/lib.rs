//! HTTP implementations of the admin API the screen talks to.

mod federation;
mod license;

pub use license::LicenseStatus;

use fedsaml_core::{Result, TransportError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::info;

/// Admin API client configuration
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the admin backend, e.g. `http://localhost:5225`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sent as `Authorization: Bearer <token>` when set
    pub auth_token: Option<String>,
    /// Path of the license status endpoint
    pub license_path: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5225".to_string(),
            timeout_secs: 30,
            auth_token: None,
            license_path: "/api/admin/license".to_string(),
        }
    }
}

/// HTTP client for the admin endpoints
#[derive(Debug, Clone)]
pub struct AdminClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    pub(crate) license_path: String,
}

impl AdminClient {
    /// Create a client with default options against `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::new_with_options(ClientOptions {
            base_url: base_url.into(),
            ..ClientOptions::default()
        })
    }

    pub fn new_with_options(options: ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &options.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| TransportError::InvalidConfig(format!("auth token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()
            .map_err(|e| TransportError::InvalidConfig(e.to_string()))?;

        let base_url = options.base_url.trim_end_matches('/').to_string();

        info!(
            "Admin API client ready for {} (timeout: {}s, auth: {})",
            base_url,
            options.timeout_secs,
            options.auth_token.is_some()
        );

        Ok(Self {
            http,
            base_url,
            license_path: options.license_path,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let client = AdminClient::new("https://admin.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://admin.example.com");
        assert_eq!(
            client.url("/api/admin/federated-saml"),
            "https://admin.example.com/api/admin/federated-saml"
        );
    }

    #[test]
    fn test_rejects_unencodable_token() {
        let result = AdminClient::new_with_options(ClientOptions {
            auth_token: Some("bad\ntoken".to_string()),
            ..ClientOptions::default()
        });
        let err = result.unwrap_err();
        assert!(matches!(err, TransportError::InvalidConfig(_)));
        assert!(!err.is_network());
        assert!(err.to_string().starts_with("Invalid client configuration"));
    }
}
