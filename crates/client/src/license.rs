use crate::AdminClient;
use fedsaml_core::{ApiResponse, LicenseGate, Result, TransportError};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LicenseStatus {
    pub status: bool,
}

impl LicenseGate for AdminClient {
    async fn is_licensed(&self) -> Result<bool> {
        let body = self
            .http
            .get(self.url(&self.license_path))
            .send()
            .await?
            .text()
            .await?;

        match ApiResponse::<LicenseStatus>::from_json(&body)? {
            ApiResponse::Data(license) => {
                debug!("License status: {}", license.status);
                Ok(license.status)
            }
            ApiResponse::Error(e) => {
                warn!("License check rejected: {}", e.message);
                Ok(false)
            }
            ApiResponse::Unrecognized => Err(TransportError::Decode(
                "license response had neither data nor error".to_string(),
            )),
        }
    }
}
