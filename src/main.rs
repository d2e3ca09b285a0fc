use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use log::{debug, error, info};

use github_repositories::{
    GITHUB_REST_ENDPOINT, RepositoriesFetcher, Repository, ReqwestTransport, StdResult,
};

/// Command line arguments for the GitHub repositories fetcher
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub users whose repositories are listed
    #[arg(short, long, value_delimiter = ',', required = true)]
    users: Vec<String>,

    /// Base URL of the GitHub REST API
    #[arg(short, long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_REST_ENDPOINT)]
    api_endpoint: String,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let fetcher = Arc::new(RepositoriesFetcher::try_new(
        Arc::new(ReqwestTransport::try_new()?),
        &args.api_endpoint,
    )?);

    let mut handles = Vec::new();
    for user in args.users {
        let fetcher = Arc::clone(&fetcher);
        let handle = tokio::spawn(async move {
            let result = fetcher.fetch_list::<Vec<Repository>>(&user).await;
            (user, result)
        });
        handles.push(handle);
    }

    let mut total_failures = 0;
    for handle in handles {
        let (user, result) = handle.await?;
        match result {
            Ok(repositories) => {
                info!("Fetched {} repositories for {user}", repositories.len());
                for repository in repositories {
                    info!("Fetched {repository}");
                }
            }
            Err(e) => {
                error!("Failed to fetch repositories for {user}: {e}");
                total_failures += 1;
            }
        }
    }

    if total_failures > 0 {
        return Err(anyhow!("Failed to fetch repositories for {total_failures} user(s)"));
    }

    Ok(())
}
