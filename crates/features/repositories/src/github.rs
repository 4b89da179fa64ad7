use crate::error::{RepositoryError, RepositoryErrorExt};
use crate::RepositorySource;
use folio_domain::config::RepositoriesConfig;
use folio_domain::repository::RepositorySummary;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// [`RepositorySource`] backed by the public GitHub REST API (unauthenticated).
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_base: String,
    sort: String,
}

impl GithubClient {
    #[must_use]
    pub fn new(config: &RepositoriesConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_owned(),
            sort: config.sort.clone(),
        }
    }

    /// Listing URL for `account`, sorted by the configured key and limited to `limit` items.
    #[must_use]
    pub fn listing_url(&self, account: &str, limit: u8) -> String {
        format!("{}/users/{account}/repos?sort={}&per_page={limit}", self.api_base, self.sort)
    }
}

impl RepositorySource for GithubClient {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(
        &self,
        account: &str,
        limit: u8,
    ) -> Result<Vec<RepositorySummary>, RepositoryError> {
        let request = self.client.get(self.listing_url(account, limit)).header(ACCEPT, GITHUB_JSON);

        // Browsers set their own User-Agent; the API rejects requests without one.
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.header(reqwest::header::USER_AGENT, env!("CARGO_PKG_NAME"));

        let response = request.send().await.context("Requesting repository listing")?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                status: status.as_u16(),
                context: Some(format!("account '{account}'").into()),
            });
        }

        let repos = response
            .json::<Vec<RepositorySummary>>()
            .await
            .context("Decoding repository listing")?;

        debug!(count = repos.len(), "Repository listing received");
        Ok(repos)
    }
}
