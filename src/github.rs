//! GitHub REST API client
//!
//! Fetches the profile and the paginated collection resources for one user.
//! Collection endpoints are walked page by page until the API returns an
//! empty page; a non-success status ends the walk early and degrades the
//! fetch to a partial result instead of failing the export.

use crate::config::GithubConfig;
use crate::error::{Error, Result};
use crate::types::{Fetched, ResourceKind};
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of the single profile request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileFetch {
    /// The profile endpoint returned a success status with this object
    Found(Value),
    /// The profile endpoint returned a non-success status
    Missing {
        /// The HTTP status code the endpoint returned
        status: u16,
    },
}

/// Client for the GitHub users namespace
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    token: Option<String>,
    page_size: u32,
}

impl GithubClient {
    /// Create a client from the given configuration
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the API base is not a valid URL, or
    /// [`Error::Network`] if the HTTP client cannot be created.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        url::Url::parse(&config.api_base).map_err(|e| Error::Config {
            message: format!(
                "github.api_base '{}' is not a valid URL: {e}",
                config.api_base
            ),
            key: Some("github.api_base".into()),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            page_size: config.page_size,
        })
    }

    /// Fetch the profile object for one user
    ///
    /// A single request, no pagination. A non-success status yields
    /// [`ProfileFetch::Missing`] rather than an error; transport failures
    /// propagate.
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileFetch> {
        let url = ResourceKind::Profile.url(&self.api_base, username);
        let response = self.request(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                username = %username,
                resource = %ResourceKind::Profile,
                status = status.as_u16(),
                "profile fetch returned non-success status"
            );
            return Ok(ProfileFetch::Missing {
                status: status.as_u16(),
            });
        }

        let raw: Value = response.json().await?;
        Ok(ProfileFetch::Found(raw))
    }

    /// Fetch every page of one collection resource
    ///
    /// Walks `?page=1&per_page=N` upward until the API returns an empty
    /// page, so a collection of `n` records costs `n / page_size + 1`
    /// requests (rounded up). A non-success status stops the walk and
    /// returns the records accumulated so far as a truncated result.
    pub async fn fetch_collection(
        &self,
        username: &str,
        kind: ResourceKind,
    ) -> Result<Fetched<Value>> {
        let url = kind.url(&self.api_base, username);
        let mut records: Vec<Value> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .request(&url)
                .query(&[
                    ("page", page.to_string()),
                    ("per_page", self.page_size.to_string()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                warn!(
                    username = %username,
                    resource = %kind,
                    status = status.as_u16(),
                    page,
                    "collection fetch returned non-success status; keeping earlier pages"
                );
                return Ok(Fetched::truncated(records, status.as_u16()));
            }

            let batch: Vec<Value> = response.json().await?;
            if batch.is_empty() {
                debug!(
                    username = %username,
                    resource = %kind,
                    total = records.len(),
                    pages = page,
                    "collection fetch complete"
                );
                return Ok(Fetched::complete(records));
            }

            records.extend(batch);
            page += 1;
        }
    }

    /// Build a GET request with the auth header applied when configured
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
        }
        request
    }
}
