//! # github-export
//!
//! Export a GitHub user's public footprint to disk: profile, repositories,
//! followers, and following, normalized into a stable document schema,
//! zipped, and optionally delivered to a Telegram chat.
//!
//! ## Design Philosophy
//!
//! github-export is designed to be:
//! - **Library-first** - The binary is a thin CLI over [`GithubExporter`]
//! - **Explicitly configured** - The library never reads the environment or
//!   prompts; callers assemble a [`Config`] and pass it in
//! - **Partial data over no data** - A collection endpoint that stops
//!   cooperating truncates that collection instead of failing the run
//!
//! ## Quick Start
//!
//! ```no_run
//! use github_export::{Config, GithubExporter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let exporter = GithubExporter::new(Config::default())?;
//!     let bundle = exporter.run("octocat").await?;
//!     println!(
//!         "{} repos exported to {}",
//!         bundle.summary.total_repos,
//!         bundle.user_dir.display()
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Telegram document delivery
pub mod delivery;
/// Error types
pub mod error;
/// Export orchestration
pub mod exporter;
/// GitHub REST API client
pub mod github;
/// Raw API objects to canonical records
pub mod normalize;
/// Canonical record types and export results
pub mod types;

// Re-export commonly used types
pub use config::{Config, DeliveryConfig, ExportConfig, GithubConfig};
pub use error::{Error, Result};
pub use exporter::{GithubExporter, SUMMARY_FILE};
pub use github::{GithubClient, ProfileFetch};
pub use types::{
    ContactRecord, ExportBundle, FetchOutcome, Fetched, RepoRecord, ResourceKind, Summary,
    UserRecord,
};
