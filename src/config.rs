//! Configuration types for github-export
//!
//! The library never reads the environment or prompts the user; the binary
//! (or an embedding application) assembles a [`Config`] and passes it in.

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// GitHub API access configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Base URL of the GitHub REST API (default: "https://api.github.com")
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Personal access token sent as `Authorization: token <value>`
    /// (None = unauthenticated requests)
    #[serde(default)]
    pub token: Option<String>,

    /// Records requested per page (default: 100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Timeout for each API request (default: 30 seconds)
    #[serde(default = "default_api_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header value; GitHub rejects requests without one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            page_size: default_page_size(),
            timeout: default_api_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Export layout configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Root directory for exports (default: "data")
    ///
    /// Each export lands in `<root>/<username>/`; archives land in
    /// `<root>/archive/<username>.zip`.
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
}

impl ExportConfig {
    /// The per-user directory holding the JSON documents
    pub fn user_dir(&self, username: &str) -> PathBuf {
        self.root_dir.join(username)
    }

    /// The directory holding all user archives
    pub fn archive_dir(&self) -> PathBuf {
        self.root_dir.join("archive")
    }

    /// The archive path for one user
    pub fn archive_path(&self, username: &str) -> PathBuf {
        self.archive_dir().join(format!("{username}.zip"))
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
        }
    }
}

/// Telegram delivery configuration
///
/// Delivery runs only when both `bot_token` and `chat_id` are set.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Base URL of the Telegram Bot API (default: "https://api.telegram.org")
    #[serde(default = "default_delivery_api_base")]
    pub api_base: String,

    /// Bot token for the `/bot<token>/sendDocument` endpoint
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Chat the archive is sent to
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Timeout for the document upload (default: 60 seconds)
    #[serde(default = "default_delivery_timeout", with = "duration_serde")]
    pub timeout: Duration,
}

impl DeliveryConfig {
    /// Whether enough is configured for delivery to run
    pub fn is_configured(&self) -> bool {
        let set = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        set(&self.bot_token) && set(&self.chat_id)
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            api_base: default_delivery_api_base(),
            bot_token: None,
            chat_id: None,
            timeout: default_delivery_timeout(),
        }
    }
}

/// Main configuration for the exporter
///
/// Fields are organized into logical sub-configs:
/// - [`github`](GithubConfig) — API base, token, page size, timeout
/// - [`export`](ExportConfig) — output directory layout
/// - [`delivery`](DeliveryConfig) — Telegram document delivery
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API access settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Output directory layout
    #[serde(default)]
    pub export: ExportConfig,

    /// Telegram delivery settings
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

// Default value functions
fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_api_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("github-export/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_root_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_delivery_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_delivery_timeout() -> Duration {
    Duration::from_secs(60)
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
