//! Shared fixtures and helpers for github-export integration tests

#![allow(dead_code)]

use github_export::{Config, DeliveryConfig, ExportConfig, GithubConfig, GithubExporter};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A profile object as the GitHub users endpoint returns it
pub fn profile(username: &str, id: u64) -> Value {
    json!({
        "login": username,
        "id": id,
        "html_url": format!("https://github.com/{username}"),
        "followers_url": format!("https://api.github.com/users/{username}/followers"),
        "following_url": format!("https://api.github.com/users/{username}/following{{/other_user}}"),
        "type": "User"
    })
}

/// A repository object as the GitHub repos endpoint returns it
pub fn repo(owner: &str, name: &str, language: Option<&str>) -> Value {
    json!({
        "name": name,
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": format!("{name} description"),
        "language": language,
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2024-01-04T17:33:17Z"
    })
}

/// A follower/following entry; the list endpoints return user-shaped objects
pub fn contact(username: &str, id: u64) -> Value {
    profile(username, id)
}

/// Mount a successful profile response for `username`
pub async fn mount_profile(server: &MockServer, username: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a collection as explicit pages plus the terminating empty page
///
/// `pages` holds the non-empty pages in order; page numbers start at 1.
pub async fn mount_pages(
    server: &MockServer,
    username: &str,
    segment: &str,
    pages: Vec<Vec<Value>>,
) {
    let mut pages = pages;
    pages.push(Vec::new());
    for (index, page) in pages.into_iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(format!("/users/{username}/{segment}")))
            .and(query_param("page", (index + 1).to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(page)))
            .mount(server)
            .await;
    }
}

/// Exporter pointed at the mock server with default page size
pub fn exporter_for(server: &MockServer, root: &TempDir, token: Option<&str>) -> GithubExporter {
    let config = Config {
        github: GithubConfig {
            api_base: server.uri(),
            token: token.map(str::to_string),
            ..GithubConfig::default()
        },
        export: ExportConfig {
            root_dir: root.path().to_path_buf(),
        },
        delivery: DeliveryConfig::default(),
    };
    GithubExporter::new(config).expect("mock server uri is a valid api base")
}

/// Exporter additionally pointed at a mock delivery endpoint
pub fn exporter_with_delivery(
    github: &MockServer,
    telegram: &MockServer,
    root: &TempDir,
) -> GithubExporter {
    let config = Config {
        github: GithubConfig {
            api_base: github.uri(),
            ..GithubConfig::default()
        },
        export: ExportConfig {
            root_dir: root.path().to_path_buf(),
        },
        delivery: DeliveryConfig {
            api_base: telegram.uri(),
            bot_token: Some("123:abc".into()),
            chat_id: Some("42".into()),
            ..DeliveryConfig::default()
        },
    };
    GithubExporter::new(config).expect("mock server uri is a valid api base")
}

/// Parse a persisted document back into a JSON value
pub fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}
