//! Core types for github-export

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The GitHub resources an export covers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// The user profile object
    Profile,
    /// Public repositories owned by the user
    Repos,
    /// Users following the exported user
    Followers,
    /// Users the exported user follows
    Following,
}

impl ResourceKind {
    /// The three paginated collection resources, in fetch order
    pub const COLLECTIONS: [ResourceKind; 3] = [
        ResourceKind::Repos,
        ResourceKind::Followers,
        ResourceKind::Following,
    ];

    /// API URL for this resource under the given base URL
    pub fn url(&self, api_base: &str, username: &str) -> String {
        let base = api_base.trim_end_matches('/');
        match self {
            ResourceKind::Profile => format!("{base}/users/{username}"),
            ResourceKind::Repos => format!("{base}/users/{username}/repos"),
            ResourceKind::Followers => format!("{base}/users/{username}/followers"),
            ResourceKind::Following => format!("{base}/users/{username}/following"),
        }
    }

    /// Output file name for this resource within the per-user directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "user_info.json",
            ResourceKind::Repos => "repos.json",
            ResourceKind::Followers => "followers.json",
            ResourceKind::Following => "following.json",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceKind::Profile => "profile",
            ResourceKind::Repos => "repos",
            ResourceKind::Followers => "followers",
            ResourceKind::Following => "following",
        };
        write!(f, "{label}")
    }
}

/// Normalized GitHub user profile
///
/// Every field is total: a missing, null, or wrong-typed upstream value
/// collapses to the empty default instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Account login (`login` upstream)
    pub username: String,

    /// Numeric account id (`id` upstream); null when missing
    pub user_id: Option<u64>,

    /// Web profile URL (`html_url` upstream)
    pub profile_url: String,

    /// API URL listing the account's followers
    pub followers_url: String,

    /// API URL template listing who the account follows
    pub following_url: String,

    /// Account type reported by GitHub (e.g., "User", "Organization")
    #[serde(rename = "type", default)]
    pub account_type: String,
}

/// Normalized repository entry
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Repository name
    pub name: String,

    /// Web URL of the repository (`html_url` upstream)
    pub repo_url: String,

    /// Repository description; empty when unset
    pub description: String,

    /// Primary language; empty when GitHub reports none
    pub language: String,

    /// Creation timestamp as reported by GitHub (ISO-8601, passed through)
    pub created_at: String,

    /// Last update timestamp as reported by GitHub
    pub updated_at: String,
}

/// Normalized follower or following entry
///
/// Followers and followed users share one schema: the user shape plus a flag
/// recording which list the entry came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// The contact's user fields, flattened into the record
    #[serde(flatten)]
    pub user: UserRecord,

    /// True when this entry comes from the following list
    pub is_following: bool,
}

/// Numeric summary of one export run, persisted to `summary.json`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of repositories persisted to `repos.json`
    pub total_repos: usize,

    /// Number of followers persisted to `followers.json`
    pub total_followers: usize,

    /// Number of followed users persisted to `following.json`
    pub total_following: usize,

    /// Web profile URL copied from the user record
    pub profile_url: String,
}

/// How a paginated fetch ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FetchOutcome {
    /// Every page was consumed down to the terminating empty page
    Complete,
    /// A non-success status ended pagination early; earlier pages were kept
    Truncated {
        /// The HTTP status code that ended pagination
        status: u16,
    },
}

impl FetchOutcome {
    /// Whether the fetch consumed every page
    pub fn is_complete(&self) -> bool {
        matches!(self, FetchOutcome::Complete)
    }
}

/// Records accumulated for one collection resource plus how the fetch ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched<T> {
    /// The records, in API order across page boundaries
    pub records: Vec<T>,

    /// Whether pagination ran to completion
    pub outcome: FetchOutcome,
}

impl<T> Fetched<T> {
    /// A fetch that consumed every page
    pub fn complete(records: Vec<T>) -> Self {
        Self {
            records,
            outcome: FetchOutcome::Complete,
        }
    }

    /// A fetch cut short by the given status code
    pub fn truncated(records: Vec<T>, status: u16) -> Self {
        Self {
            records,
            outcome: FetchOutcome::Truncated { status },
        }
    }

    /// Number of records accumulated
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Map every record, preserving the fetch outcome
    pub fn map<U, F>(self, f: F) -> Fetched<U>
    where
        F: FnMut(T) -> U,
    {
        Fetched {
            records: self.records.into_iter().map(f).collect(),
            outcome: self.outcome,
        }
    }
}

/// Everything produced by one export run
#[derive(Clone, Debug)]
pub struct ExportBundle {
    /// The username the export ran for
    pub username: String,

    /// The normalized profile
    pub user: UserRecord,

    /// Repositories with their fetch outcome
    pub repos: Fetched<RepoRecord>,

    /// Followers with their fetch outcome
    pub followers: Fetched<ContactRecord>,

    /// Followed users with their fetch outcome
    pub following: Fetched<ContactRecord>,

    /// The numeric summary persisted to `summary.json`
    pub summary: Summary,

    /// The per-user directory holding the five JSON documents
    pub user_dir: PathBuf,

    /// The zip archive of the per-user directory
    pub archive_path: PathBuf,

    /// Whether the archive was handed to the delivery channel
    pub delivered: bool,
}
