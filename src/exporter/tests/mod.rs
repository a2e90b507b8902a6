use crate::config::{Config, DeliveryConfig, ExportConfig, GithubConfig};
use crate::error::Error;
use crate::exporter::GithubExporter;
use crate::types::FetchOutcome;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Page size every test exporter is configured with
const TEST_PAGE_SIZE: u32 = 2;

/// Profile object the mock GitHub serves for octocat
fn octocat_profile() -> Value {
    json!({
        "login": "octocat",
        "id": 583231,
        "html_url": "https://github.com/octocat",
        "followers_url": "https://api.github.com/users/octocat/followers",
        "following_url": "https://api.github.com/users/octocat/following{/other_user}",
        "type": "User"
    })
}

/// Two repositories shaped like the public octocat account
fn octocat_repos() -> Vec<Value> {
    vec![
        json!({
            "name": "Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "My first repository on GitHub!",
            "language": null,
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2024-01-04T17:33:17Z"
        }),
        json!({
            "name": "Spoon-Knife",
            "html_url": "https://github.com/octocat/Spoon-Knife",
            "description": "This repo is for demonstration purposes only.",
            "language": "HTML",
            "created_at": "2011-01-27T19:30:43Z",
            "updated_at": "2024-01-05T01:00:25Z"
        }),
    ]
}

/// Mount a successful profile response for `username`
async fn mount_profile(server: &MockServer, username: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount one page of a collection; pages are 1-based
async fn mount_page(server: &MockServer, username: &str, segment: &str, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}/{segment}")))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a whole collection as [`TEST_PAGE_SIZE`]-sized pages followed by the
/// terminating empty page
async fn mount_collection(server: &MockServer, username: &str, segment: &str, records: Vec<Value>) {
    let mut pages: Vec<Vec<Value>> = records
        .chunks(TEST_PAGE_SIZE as usize)
        .map(<[Value]>::to_vec)
        .collect();
    pages.push(Vec::new());
    for (index, page) in pages.into_iter().enumerate() {
        mount_page(server, username, segment, index as u32 + 1, Value::Array(page)).await;
    }
}

/// Mount the full octocat scenario: profile, two repos, nobody following
/// or followed
async fn mount_octocat(server: &MockServer) {
    mount_profile(server, "octocat", &octocat_profile()).await;
    mount_collection(server, "octocat", "repos", octocat_repos()).await;
    mount_collection(server, "octocat", "followers", Vec::new()).await;
    mount_collection(server, "octocat", "following", Vec::new()).await;
}

/// Exporter wired to the mock server, exporting into `root`
fn test_exporter(server: &MockServer, root: &TempDir) -> GithubExporter {
    let config = Config {
        github: GithubConfig {
            api_base: server.uri(),
            page_size: TEST_PAGE_SIZE,
            ..GithubConfig::default()
        },
        export: ExportConfig {
            root_dir: root.path().to_path_buf(),
        },
        delivery: DeliveryConfig::default(),
    };
    GithubExporter::new(config).expect("mock server uri is a valid api base")
}

/// Exporter additionally wired to a mock delivery endpoint
fn test_exporter_with_delivery(
    github: &MockServer,
    telegram: &MockServer,
    root: &TempDir,
) -> GithubExporter {
    let config = Config {
        github: GithubConfig {
            api_base: github.uri(),
            page_size: TEST_PAGE_SIZE,
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
fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}
