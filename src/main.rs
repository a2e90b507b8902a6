//! Command-line entry point for github-export
//!
//! Thin wrapper over [`github_export::GithubExporter`]: assemble a config
//! from flags, environment variables, and interactive prompts, run one
//! export, and report where the data landed.

use anyhow::Result;
use clap::Parser;
use github_export::{
    Config, DeliveryConfig, ExportConfig, FetchOutcome, GithubConfig, GithubExporter, ResourceKind,
};
use inquire::{Password, Text};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Export a GitHub user's public data to JSON documents and a zip archive
#[derive(Parser, Debug)]
#[command(name = "github-export", author, version, about)]
struct Cli {
    /// GitHub username to export (prompted for when omitted)
    username: Option<String>,

    /// Personal access token; empty means unauthenticated requests
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Root directory exports are written into
    #[arg(long, default_value = "data")]
    export_dir: PathBuf,

    /// Telegram bot token for archive delivery
    #[arg(long, env = "TELEGRAM_BOT_TOKEN")]
    bot_token: Option<String>,

    /// Telegram chat the archive is delivered to
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    chat_id: Option<String>,

    /// Skip delivery even when bot credentials are present
    #[arg(long)]
    no_delivery: bool,
}

/// Assemble the exporter configuration from resolved CLI inputs
fn build_config(cli: &Cli, token: Option<String>) -> Config {
    Config {
        github: GithubConfig {
            token,
            ..GithubConfig::default()
        },
        export: ExportConfig {
            root_dir: cli.export_dir.clone(),
        },
        delivery: if cli.no_delivery {
            DeliveryConfig::default()
        } else {
            DeliveryConfig {
                bot_token: cli.bot_token.clone(),
                chat_id: cli.chat_id.clone(),
                ..DeliveryConfig::default()
            }
        },
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("github_export=info")),
        )
        .init();

    let cli = Cli::parse();

    let username = match &cli.username {
        Some(name) => name.clone(),
        None => Text::new("GitHub username:").prompt()?,
    };
    let token = match cli.token.clone() {
        Some(token) => token,
        None => Password::new("GitHub token:")
            .without_confirmation()
            .with_help_message("leave empty for unauthenticated requests")
            .prompt()?,
    };
    let token = (!token.is_empty()).then_some(token);

    let exporter = GithubExporter::new(build_config(&cli, token))?;
    let bundle = exporter.run(&username).await?;

    for (kind, outcome) in [
        (ResourceKind::Repos, bundle.repos.outcome),
        (ResourceKind::Followers, bundle.followers.outcome),
        (ResourceKind::Following, bundle.following.outcome),
    ] {
        if let FetchOutcome::Truncated { status } = outcome {
            println!("Note: {kind} fetch for {username} stopped early (HTTP {status}); partial data exported.");
        }
    }
    println!(
        "Your data has been stored at: {}",
        bundle.user_dir.display()
    );
    println!("Archive: {}", bundle.archive_path.display());
    if bundle.delivered {
        println!("Archive delivered to the configured chat.");
    }

    Ok(())
}
