use url::Url;

use crate::{FetchResult, RawBytes};

/// A trait for performing HTTP GET requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpTransport: Sync + Send {
    /// Performs a single GET request and returns the body of a `200 OK` response.
    async fn perform_get(&self, url: &Url) -> FetchResult<RawBytes>;
}
