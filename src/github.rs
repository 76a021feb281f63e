use eyre::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::config::Config;

const USER_AGENT: &str = "github-users-proxy";
const ACCEPT: &str = "application/vnd.github+json";

/// Unauthenticated client for GitHub's user endpoints. One outbound call per
/// operation; no retries.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: Config,
}

impl GitHubClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self, since: Option<u64>, per_page: u32) -> Result<Value> {
        let url = format!("{}/users", self.config.github_api);
        let mut request = self
            .client
            .get(&url)
            .query(&[("per_page", per_page.to_string())]);
        if let Some(since) = since {
            request = request.query(&[("since", since.to_string())]);
        }

        self.send_json(request).await
    }

    #[instrument(skip(self))]
    pub async fn search_users(
        &self,
        term: &str,
        sort: Option<&str>,
        order: Option<&str>,
        page: Option<u32>,
        per_page: u32,
    ) -> Result<Value> {
        let url = format!("{}/search/users", self.config.github_api);
        // Scope the term to user logins, names and emails, excluding orgs.
        let q = format!("{term} in:login name email type:user");

        let mut request = self.client.get(&url).query(&[("q", q.as_str())]);
        if let Some(sort) = sort {
            request = request.query(&[("sort", sort)]);
        }
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }
        if let Some(page) = page {
            request = request.query(&[("page", page.to_string())]);
        }
        request = request.query(&[("per_page", per_page.to_string())]);

        self.send_json(request).await
    }

    /// Returns `Ok(None)` when the user does not exist upstream.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<Option<Value>> {
        let url = format!("{}/users/{username}", self.config.github_api);
        let response = with_headers(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!("GitHub API error for user {username}: {status}: {text}");
            bail!("GitHub API error: {status}");
        }

        let body = response
            .json()
            .await
            .wrap_err_with(|| format!("Failed to parse response body for user {username}"))?;
        Ok(Some(body))
    }

    async fn send_json(&self, request: RequestBuilder) -> Result<Value> {
        let response = with_headers(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!("GitHub API error: Status: {status}, Body: {text}");
            bail!("GitHub API error: {status}");
        }

        let text = response.text().await?;
        let json = serde_json::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse JSON response: {text}"))?;
        Ok(json)
    }
}

fn with_headers(request: RequestBuilder) -> RequestBuilder {
    request
        .header("Accept", ACCEPT)
        .header("User-Agent", USER_AGENT)
}
