use anyhow::{Context, Result};

use crate::commands::CommandReport;
use crate::config::ChatsyncConfig;
use crate::spotify::SpotifyClient;

/// Resolve the configured (or given) playlist name to its ID.
pub fn run(cfg: &ChatsyncConfig, name: Option<&str>) -> Result<CommandReport> {
    let name = match name {
        Some(given) => given,
        None => cfg.require_playlist_name()?,
    };
    let mut report = CommandReport::new("resolve");

    let client = SpotifyClient::connect(&cfg.spotify).context("failed to connect to spotify")?;
    let playlist = client
        .playlist_id_by_name(name)
        .with_context(|| format!("failed to resolve playlist {name:?}"))?;

    report.detail(format!("playlist_name={name}"));
    report.detail(format!("playlist_id={playlist}"));
    Ok(report)
}
