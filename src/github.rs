use crate::error::{PortfolioError, Result};
use crate::models::{Profile, Repository, Snapshot};
use chrono::Utc;
use futures::try_join;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const RATE_LIMIT_WARN_BELOW: u32 = 10;

/// Unauthenticated GitHub REST client scoped to the two endpoints the
/// page needs. Cheap to clone; clones share the underlying connection
/// pool.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    client: Client,
    base: String,
}

impl GitHubClient {
    /// Build a client against `base_url`, normally `DEFAULT_API_BASE`.
    /// The URL is validated up front so a bad value fails at startup
    /// instead of on the first refresh.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| PortfolioError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(PortfolioError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                parsed.scheme(),
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent("github-portfolio/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        warn_if_rate_limited(&response);

        match response.status() {
            reqwest::StatusCode::OK => {
                // Parse from the raw body rather than Response::json so a
                // well-formed HTTP response carrying a malformed payload
                // surfaces as a JSON error, not a network error.
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            reqwest::StatusCode::NOT_FOUND => {
                Err(PortfolioError::NotFound(format!("no such resource: {}", url)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch the account profile.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        validate_account(username)?;
        let url = format!("{}/users/{}", self.base, username);
        debug!(%url, "fetching profile");
        self.get_json(&url).await
    }

    /// Fetch the account's public repositories, newest activity first.
    /// One page of 100 covers the working set for a personal page.
    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        validate_account(username)?;
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base, username, PER_PAGE
        );
        debug!(%url, "fetching repositories");
        self.get_json(&url).await
    }

    /// Fetch profile and repositories concurrently and stamp the result.
    /// If either request fails the whole load fails and nothing is
    /// published, so a snapshot can never mix data from different passes.
    pub async fn load_snapshot(&self, username: &str) -> Result<Snapshot> {
        let (profile, repositories) = try_join!(
            self.fetch_profile(username),
            self.fetch_repositories(username)
        )?;

        debug!(
            account = username,
            repositories = repositories.len(),
            "snapshot loaded"
        );

        Ok(Snapshot {
            profile,
            repositories,
            fetched_at: Utc::now(),
        })
    }
}

fn validate_account(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(PortfolioError::InvalidAccount(
            "account name must not be empty".to_string(),
        ));
    }
    if username.contains('/') {
        return Err(PortfolioError::InvalidAccount(format!(
            "account name must not contain '/': {}",
            username
        )));
    }
    Ok(())
}

/// Unauthenticated requests share a small per-IP quota. Exhaustion is not
/// fatal here; the failed refresh is reported by the caller and the page
/// keeps its previous content.
fn warn_if_rate_limited(response: &Response) {
    let remaining = response
        .headers()
        .get("X-RateLimit-Remaining")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok());

    match remaining {
        Some(0) => warn!("GitHub API rate limit exhausted; refreshes will fail until it resets"),
        Some(n) if n < RATE_LIMIT_WARN_BELOW => {
            warn!(remaining = n, "GitHub API rate limit is running low")
        }
        _ => {}
    }
}
