//! Normalization of raw GitHub payloads into the fixed export schema
//!
//! The API returns rich objects; the export keeps a small subset under stable
//! keys. Every function here is total: a missing key, a JSON null, or a
//! wrong-typed value collapses to the empty default instead of failing.

use crate::types::{ContactRecord, RepoRecord, UserRecord};
use serde_json::Value;

/// Normalize a raw profile object into a [`UserRecord`]
///
/// # Examples
///
/// ```
/// use github_export::normalize;
/// use serde_json::json;
///
/// let record = normalize::user(&json!({"login": "octocat", "id": 1}));
/// assert_eq!(record.username, "octocat");
/// assert_eq!(record.user_id, Some(1));
/// assert_eq!(record.profile_url, "");
/// ```
#[must_use]
pub fn user(raw: &Value) -> UserRecord {
    UserRecord {
        username: string_field(raw, "login"),
        user_id: raw.get("id").and_then(Value::as_u64),
        profile_url: string_field(raw, "html_url"),
        followers_url: string_field(raw, "followers_url"),
        following_url: string_field(raw, "following_url"),
        account_type: string_field(raw, "type"),
    }
}

/// Normalize a raw repository object into a [`RepoRecord`]
#[must_use]
pub fn repo(raw: &Value) -> RepoRecord {
    RepoRecord {
        name: string_field(raw, "name"),
        repo_url: string_field(raw, "html_url"),
        description: string_field(raw, "description"),
        language: string_field(raw, "language"),
        created_at: string_field(raw, "created_at"),
        updated_at: string_field(raw, "updated_at"),
    }
}

/// Normalize a raw follower or following entry into a [`ContactRecord`]
///
/// `is_following` records which list the entry came from: false for the
/// follower list, true for the following list.
#[must_use]
pub fn contact(raw: &Value, is_following: bool) -> ContactRecord {
    ContactRecord {
        user: user(raw),
        is_following,
    }
}

/// Extract a string field; missing, null, and non-string values become ""
fn string_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
