use crate::AdminClient;
use fedsaml_core::{
    ApiResponse, Draft, FederationApi, Result, SamlFederationApp, CREATE_APP_ENDPOINT,
};
use tracing::debug;

impl FederationApi for AdminClient {
    /// POST the draft as JSON. The envelope is read whatever the status
    /// code, since rejections come back as 4xx with an `error` body.
    async fn create_app(&self, draft: &Draft) -> Result<ApiResponse<SamlFederationApp>> {
        let resp = self
            .http
            .post(self.url(CREATE_APP_ENDPOINT))
            .json(draft)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!("Create app responded {} ({} bytes)", status, body.len());

        ApiResponse::from_json(&body)
    }
}
