use anyhow::Context;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{FetchError, FetchResult, HttpTransport, RawBytes, StdResult};

/// The user agent sent with every request, the GitHub API rejects anonymous clients.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Performs HTTP requests with a `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new `ReqwestTransport` instance with a default HTTP client.
    pub fn try_new() -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn perform_get(&self, url: &Url) -> FetchResult<RawBytes> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.into()))?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Unexpected HTTP status {status} for {url}");
            return Err(FetchError::InvalidResponse(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map(|bytes| RawBytes::from(bytes.to_vec()))
            .map_err(|e| FetchError::Transport(e.into()))?;
        if body.is_empty() {
            return Err(FetchError::NoData);
        }
        debug!("Received {} bytes from {url}", body.len());

        Ok(body)
    }
}
