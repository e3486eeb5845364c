//! Plain GET calls against the deployed APIs.

use tracing::debug;

use crate::error::{CheckError, Result};

/// Append a single query parameter to `base`.
///
/// The value is substituted verbatim, not percent-encoded. Image URLs with
/// their own query strings will not survive this.
pub fn build_url(base: &str, name: &str, value: &str) -> String {
    format!("{base}?{name}={value}")
}

/// Issues GET requests and hands back the raw body.
#[derive(Debug, Clone, Default)]
pub struct EndpointCaller {
    client: reqwest::Client,
}

impl EndpointCaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `base?name=value` and return the body as text.
    ///
    /// The status code is not inspected: an error page comes back as text
    /// like any other body. Only transport failures are errors.
    pub async fn call(&self, base: &str, name: &str, value: &str) -> Result<String> {
        let url = build_url(base, name, value);
        let transport = |source| CheckError::Transport {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        debug!(%url, status = %response.status(), "endpoint responded");

        response.text().await.map_err(transport)
    }
}
