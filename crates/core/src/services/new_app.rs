use crate::draft::{Draft, FieldKey};
use crate::error::FormError;
use crate::lifetime::MountScope;
use crate::models::{ApiResponse, SamlFederationApp};
use crate::navigation::{edit_app_path, NavigationCommand};
use crate::ports::{FederationApi, LicenseGate, Navigator, Notifier, Translator};
use crate::screen::{compose_screen, Screen};
use crate::state::FormState;
use tracing::{debug, info, warn};

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft failed form validation; no request was made
    Invalid(FormError),
    /// A submission is already pending; no request was made
    Busy,
    /// App created and the router was told to replace this screen
    Created(SamlFederationApp),
    /// Backend rejected the draft with this message
    Rejected(String),
    /// Transport failure or a response of unexpected shape
    Failed(String),
    /// Screen went away before the response arrived
    Unmounted,
}

/// Drives the "new federated SAML app" screen.
///
/// Owns the draft and in-flight flag, and talks to the host only through
/// the collaborator traits it was built with.
pub struct NewAppController<A, N, V, T> {
    api: A,
    notifier: N,
    navigator: V,
    translator: T,
    state: FormState,
    scope: MountScope,
}

impl<A, N, V, T> NewAppController<A, N, V, T>
where
    A: FederationApi,
    N: Notifier,
    V: Navigator,
    T: Translator,
{
    /// Mount a fresh screen with an empty draft
    #[must_use]
    pub fn new(api: A, notifier: N, navigator: V, translator: T) -> Self {
        Self {
            api,
            notifier,
            navigator,
            translator,
            state: FormState::new(),
            scope: MountScope::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    #[must_use]
    pub fn translator(&self) -> &T {
        &self.translator
    }

    #[must_use]
    pub fn draft(&self) -> Draft {
        self.state.draft()
    }

    pub fn set_field(&self, key: FieldKey, value: impl Into<String>) {
        self.state.set_field(key, value);
    }

    /// Tear the screen down. A pending submit resolves as `Unmounted`.
    pub fn unmount(&self) {
        debug!("New app screen unmounted");
        self.scope.unmount();
    }

    /// Compose the screen, consulting the license gate first.
    ///
    /// A failing gate check counts as unlicensed.
    pub async fn render<G: LicenseGate>(&self, gate: &G) -> Screen {
        let licensed = match gate.is_licensed().await {
            Ok(licensed) => licensed,
            Err(e) => {
                warn!("License check failed: {}", e);
                false
            }
        };
        self.compose(licensed)
    }

    /// Compose the screen for a known license state
    #[must_use]
    pub fn compose(&self, licensed: bool) -> Screen {
        compose_screen(
            &self.translator,
            licensed,
            &self.state.draft(),
            self.state.is_in_flight(),
        )
    }

    /// Submit the current draft.
    ///
    /// The in-flight flag is raised before the request and lowered as soon
    /// as it resolves, before the response is interpreted. Every attempt
    /// that reaches the network shows exactly one notification.
    ///
    /// # Returns
    /// * `Created(app)` - Success toast shown, router told to `Replace` with the edit page
    /// * `Rejected(message)` - Backend `error.message` shown verbatim, draft kept
    /// * `Failed(reason)` - Transport or decode failure, generic error toast, draft kept
    /// * `Invalid(FormError)` - Draft failed validation; no request, no toast
    /// * `Busy` - Another submit is pending; no request, no toast
    /// * `Unmounted` - Screen went away; flag lowered, no toast, no navigation
    ///
    /// # Examples
    /// ```ignore
    /// let controller = NewAppController::new(api, notifier, navigator, Catalog::default());
    /// controller.set_field(FieldKey::Name, "Acme");
    /// match controller.submit().await {
    ///     SubmitOutcome::Created(app) => println!("Created app with id {}", app.id),
    ///     other => println!("Not created: {:?}", other),
    /// }
    /// ```
    pub async fn submit(&self) -> SubmitOutcome {
        if !self.scope.is_mounted() {
            return SubmitOutcome::Unmounted;
        }

        let draft = self.state.draft();
        if let Err(e) = draft.validate() {
            debug!("Draft blocked by form validation: {}", e);
            return SubmitOutcome::Invalid(e);
        }

        if !self.state.begin_submit() {
            debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        }

        info!(
            "Creating federated SAML app '{}' (tenant: {}, product: {})",
            draft.name, draft.tenant, draft.product
        );

        let Some(result) = self.scope.run(self.api.create_app(&draft)).await else {
            info!("Screen unmounted before the creation response arrived");
            self.state.finish_submit();
            return SubmitOutcome::Unmounted;
        };

        self.state.finish_submit();

        match result {
            Ok(ApiResponse::Data(app)) => {
                info!("Created federated SAML app with ID {}", app.id);
                self.notifier
                    .success(&self.translator.translate("saml_federation_new_success"));
                let command = NavigationCommand::Replace(edit_app_path(&app.id));
                debug!("Navigating: {}", command);
                self.navigator.navigate(command);
                SubmitOutcome::Created(app)
            }
            Ok(ApiResponse::Error(body)) => {
                info!("Federated SAML app rejected: {}", body.message);
                self.notifier.error(&body.message);
                SubmitOutcome::Rejected(body.message)
            }
            Ok(ApiResponse::Unrecognized) => {
                warn!("Creation response had neither data nor error");
                self.fail("unrecognized response".to_string())
            }
            Err(e) => {
                warn!("Failed to create federated SAML app: {}", e);
                self.fail(e.to_string())
            }
        }
    }

    fn fail(&self, reason: String) -> SubmitOutcome {
        self.notifier
            .error(&self.translator.translate("saml_federation_new_failure"));
        SubmitOutcome::Failed(reason)
    }
}
