//! Headless "new federated SAML app" screen.
//!
//! The draft, the in-flight flag and the create-and-redirect workflow live
//! here. Rendering, HTTP, toasts, routing and translations are supplied by
//! the host through the traits in [`ports`].

mod draft;
mod error;
mod i18n;
mod lifetime;
mod models;
mod navigation;
pub mod ports;
mod screen;
mod services;
mod state;

pub use draft::{Draft, FieldKey, InputKind};
pub use error::{FormError, Result, TransportError};
pub use i18n::{Catalog, TranslationDictionary, DEFAULT_LOCALE};
pub use lifetime::MountScope;
pub use models::{ApiErrorBody, ApiResponse, SamlFederationApp};
pub use navigation::{edit_app_path, NavigationCommand, APPS_INDEX_PATH, CREATE_APP_ENDPOINT};
pub use ports::{FederationApi, LicenseGate, Navigator, Notifier, StaticLicense, Translator};
pub use screen::{compose_screen, ButtonView, FieldView, FormView, LinkView, Screen};
pub use services::{NewAppController, SubmitOutcome};
pub use state::FormState;
