use std::path::{Path, PathBuf};

use anyhow::Context;
use tonal_config::TonalConfig;

use crate::cli::GlobalFlags;

/// Project-level config file, relative to the project root.
const PROJECT_CONFIG: &str = ".tonal/config.toml";

/// Load `.env`, extract layered configuration and apply flag overrides.
///
/// The bearer token is not checked here; callers use
/// `TwitterConfig::require_token` before building the client.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TonalConfig> {
    load_project_dotenv(flags.project.as_deref())?;

    let mut config = match config_file(flags) {
        Some(path) => TonalConfig::load_file(&path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => TonalConfig::load().context("failed to load tonal configuration")?,
    };

    apply_overrides(&mut config, flags)?;
    tracing::debug!(twitter = ?config.twitter, "configuration loaded");
    Ok(config)
}

/// `--config` wins; otherwise `--project` points at its own `.tonal/config.toml`.
fn config_file(flags: &GlobalFlags) -> Option<PathBuf> {
    if let Some(path) = &flags.config {
        return Some(path.clone());
    }

    flags
        .project
        .as_ref()
        .map(|root| root.join(PROJECT_CONFIG))
        .filter(|path| path.exists())
}

fn apply_overrides(config: &mut TonalConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(limit) = flags.following_limit {
        config.twitter.following_page_size = limit;
    }
    if let Some(limit) = flags.tweet_limit {
        config.twitter.timeline_page_size = limit;
    }
    config
        .twitter
        .validate()
        .context("invalid --following-limit or --tweet-limit")?;
    Ok(())
}

fn load_project_dotenv(project: Option<&Path>) -> anyhow::Result<()> {
    if let Some(root) = project {
        if !root.is_dir() {
            anyhow::bail!(
                "invalid --project '{}': directory does not exist",
                root.display()
            );
        }

        let env_path = root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
