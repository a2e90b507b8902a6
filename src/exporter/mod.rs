//! Export orchestration
//!
//! Drives a complete export run for one username: fetch the profile, fetch
//! the three collections, normalize everything into the canonical record
//! shapes, persist the five JSON documents, zip them, and optionally hand
//! the archive to the delivery channel. Steps run strictly in sequence.

mod archive;
mod persist;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

// Re-exports
pub use persist::SUMMARY_FILE;

use crate::config::Config;
use crate::delivery;
use crate::error::{Error, Result};
use crate::github::{GithubClient, ProfileFetch};
use crate::normalize;
use crate::types::{ExportBundle, ResourceKind, Summary};
use tracing::info;

/// Orchestrates export runs against one configuration
///
/// Construct once with [`GithubExporter::new`], then call
/// [`run`](GithubExporter::run) per username. The exporter owns its HTTP
/// client, so repeated runs reuse the same connection pool.
pub struct GithubExporter {
    config: Config,
    client: GithubClient,
}

impl GithubExporter {
    /// Create an exporter from an explicit configuration object
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the GitHub API base is not a valid URL.
    pub fn new(config: Config) -> Result<Self> {
        let client = GithubClient::new(&config.github)?;
        Ok(Self { config, client })
    }

    /// Run the full export pipeline for `username`
    ///
    /// A missing profile aborts the run before anything is written. A
    /// truncated collection does not: whatever was accumulated is persisted
    /// and the truncation is visible in the returned bundle. The per-user
    /// directory is reset only after every fetch has returned, so a
    /// transport failure leaves any previous export intact.
    ///
    /// # Errors
    /// Returns [`Error::ProfileNotFound`] when the profile endpoint yields a
    /// non-success status, [`Error::Network`] on transport failures,
    /// [`Error::Io`] / [`Error::Archive`] on persistence failures, and
    /// [`Error::Delivery`] when a configured delivery is rejected.
    pub async fn run(&self, username: &str) -> Result<ExportBundle> {
        info!(username = %username, "starting export");

        let user = match self.client.fetch_profile(username).await? {
            ProfileFetch::Found(raw) => normalize::user(&raw),
            ProfileFetch::Missing { status } => {
                return Err(Error::ProfileNotFound {
                    username: username.to_string(),
                    status,
                });
            }
        };

        let repos = self
            .client
            .fetch_collection(username, ResourceKind::Repos)
            .await?
            .map(|raw| normalize::repo(&raw));
        let followers = self
            .client
            .fetch_collection(username, ResourceKind::Followers)
            .await?
            .map(|raw| normalize::contact(&raw, false));
        let following = self
            .client
            .fetch_collection(username, ResourceKind::Following)
            .await?
            .map(|raw| normalize::contact(&raw, true));

        let summary = Summary {
            total_repos: repos.len(),
            total_followers: followers.len(),
            total_following: following.len(),
            profile_url: user.profile_url.clone(),
        };

        let user_dir = self.config.export.user_dir(username);
        persist::reset_user_dir(&user_dir)?;
        persist::write_document(&user_dir, ResourceKind::Profile.file_name(), &user)?;
        persist::write_document(&user_dir, ResourceKind::Repos.file_name(), &repos.records)?;
        persist::write_document(
            &user_dir,
            ResourceKind::Followers.file_name(),
            &followers.records,
        )?;
        persist::write_document(
            &user_dir,
            ResourceKind::Following.file_name(),
            &following.records,
        )?;
        persist::write_document(&user_dir, SUMMARY_FILE, &summary)?;

        let archive_path = self.config.export.archive_path(username);
        archive::create_archive(&user_dir, &archive_path)?;

        let delivered = if self.config.delivery.is_configured() {
            delivery::send_archive(
                &self.config.delivery,
                &archive_path,
                username,
                &user.profile_url,
            )
            .await?;
            true
        } else {
            false
        };

        info!(
            username = %username,
            repos = summary.total_repos,
            followers = summary.total_followers,
            following = summary.total_following,
            delivered,
            "export complete"
        );

        Ok(ExportBundle {
            username: username.to_string(),
            user,
            repos,
            followers,
            following,
            summary,
            user_dir,
            archive_path,
            delivered,
        })
    }
}
