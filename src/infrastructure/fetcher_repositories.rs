use std::sync::Arc;

use anyhow::Context;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{FetchError, FetchResult, HttpTransport, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

/// Fetches the repositories of a user from the GitHub REST API.
pub struct RepositoriesFetcher {
    /// The transport used to perform the requests.
    transport: Arc<dyn HttpTransport>,

    /// The base URL of the API.
    api_endpoint: Url,
}

impl RepositoriesFetcher {
    /// Creates a new `RepositoriesFetcher` instance targeting the given API endpoint.
    pub fn try_new(transport: Arc<dyn HttpTransport>, api_endpoint: &str) -> StdResult<Self> {
        let api_endpoint = Url::parse(api_endpoint)
            .with_context(|| format!("Invalid API endpoint: {api_endpoint}"))?;

        Ok(Self {
            transport,
            api_endpoint,
        })
    }

    /// Builds the `users/{user}/repos` URL.
    ///
    /// The user must end up verbatim as a single path segment: anything the URL
    /// parser would split, escape or normalize is rejected.
    fn repositories_url(&self, user: &str) -> FetchResult<Url> {
        let invalid_user = || FetchError::InvalidUser(user.to_string());
        if user.is_empty() {
            return Err(invalid_user());
        }

        let url = Url::parse(&format!(
            "{}/users/{user}/repos",
            self.api_endpoint.as_str().trim_end_matches('/')
        ))
        .map_err(|_| invalid_user())?;
        let expected_segments = self
            .api_endpoint
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .chain(["users", user, "repos"])
            .collect::<Vec<_>>();
        let segments = url
            .path_segments()
            .map(|segments| segments.collect::<Vec<_>>())
            .unwrap_or_default();
        if segments != expected_segments || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid_user());
        }

        Ok(url)
    }

    /// Fetches the repositories of `user` and decodes them into `T`.
    pub async fn fetch_list<T: DeserializeOwned>(&self, user: &str) -> FetchResult<T> {
        let url = self.repositories_url(user).inspect_err(|e| warn!("{e}"))?;
        let body = self.transport.perform_get(&url).await?;

        let is_array_of_objects = match serde_json::from_slice::<Value>(&body)? {
            Value::Array(items) => items.iter().all(Value::is_object),
            _ => false,
        };
        if !is_array_of_objects {
            warn!("Response from {url} is not a JSON array of objects");
            return Err(FetchError::NoData);
        }
        let decoded = serde_json::from_slice::<T>(&body)?;
        debug!("Decoded repositories of {user}");

        Ok(decoded)
    }
}
