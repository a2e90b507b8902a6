//! Telegram delivery of finished export archives
//!
//! The archive is uploaded with the Bot API `sendDocument` method as a
//! multipart form: the target `chat_id`, a caption naming the exported user
//! and their profile URL, and the zip as the `document` part. Unlike the
//! fetch side, delivery is awaited to completion and its failures propagate;
//! by the time it runs the export files are already on disk.

use crate::config::DeliveryConfig;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::{info, warn};

/// Upload the archive to the configured chat
///
/// # Errors
/// Returns [`Error::Delivery`] when the endpoint rejects the upload or the
/// configuration is incomplete, [`Error::Io`] when the archive cannot be
/// read, and [`Error::Network`] on transport failures.
pub async fn send_archive(
    config: &DeliveryConfig,
    archive_path: &Path,
    username: &str,
    profile_url: &str,
) -> Result<()> {
    let (Some(bot_token), Some(chat_id)) = (&config.bot_token, &config.chat_id) else {
        return Err(Error::Delivery {
            status: None,
            reason: "bot_token and chat_id must both be configured".into(),
        });
    };

    let file_name = archive_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("export.zip")
        .to_string();
    let bytes = tokio::fs::read(archive_path).await?;

    let caption = format!("GitHub export for {username}\n{profile_url}");
    let document = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/zip")
        .map_err(|e| Error::Delivery {
            status: None,
            reason: format!("invalid document part: {e}"),
        })?;
    let form = reqwest::multipart::Form::new()
        .text("chat_id", chat_id.clone())
        .text("caption", caption)
        .part("document", document);

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;

    let url = format!(
        "{}/bot{}/sendDocument",
        config.api_base.trim_end_matches('/'),
        bot_token
    );
    let response = client.post(&url).multipart(form).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(
            username = %username,
            status = status.as_u16(),
            "document delivery rejected"
        );
        return Err(Error::Delivery {
            status: Some(status.as_u16()),
            reason: format!("sendDocument returned status {status}: {body}"),
        });
    }

    info!(username = %username, chat_id = %chat_id, "archive delivered");
    Ok(())
}
