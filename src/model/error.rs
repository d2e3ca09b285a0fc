use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// The result of fetching and decoding a list of repositories.
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch error
#[derive(Error, Debug)]
pub enum FetchError {
    /// The repositories URL can not be built from the given user.
    #[error("Invalid user: can not build repositories URL for '{0}'")]
    InvalidUser(String),

    /// The server answered with a status other than `200 OK`.
    #[error("Invalid response: HTTP status {0}")]
    InvalidResponse(u16),

    /// The response body is empty or is not a JSON array of objects.
    #[error("No data in response")]
    NoData,

    /// Network level failure, forwarded as is.
    #[error(transparent)]
    Transport(anyhow::Error),

    /// The body could not be decoded into the requested type, forwarded as is.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
