mod fetcher_repositories;
mod transport_reqwest;

pub use fetcher_repositories::*;
pub use transport_reqwest::*;
