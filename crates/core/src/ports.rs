//! Collaborators the screen depends on but does not implement.
//!
//! The host wires concrete implementations in: an HTTP client for the API
//! and license check, a toast surface, a router and a translation catalog.

use crate::draft::Draft;
use crate::error::Result;
use crate::models::{ApiResponse, SamlFederationApp};
use crate::navigation::NavigationCommand;
use std::future::Future;

/// Backend that creates federated SAML apps.
pub trait FederationApi {
    /// Issue exactly one creation request with the serialized draft.
    fn create_app(
        &self,
        draft: &Draft,
    ) -> impl Future<Output = Result<ApiResponse<SamlFederationApp>>> + Send;
}

/// Entitlement check guarding the whole screen.
pub trait LicenseGate {
    fn is_licensed(&self) -> impl Future<Output = Result<bool>> + Send;
}

/// Transient notification surface.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait Navigator {
    fn navigate(&self, command: NavigationCommand);
}

/// Display-string lookup keyed by identifiers such as `back` or `create_app`.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

/// A license gate with a fixed answer, for hosts that check entitlement
/// elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct StaticLicense(pub bool);

impl LicenseGate for StaticLicense {
    async fn is_licensed(&self) -> Result<bool> {
        Ok(self.0)
    }
}
