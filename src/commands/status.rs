use anyhow::Result;
use std::path::Path;

use crate::commands::CommandReport;
use crate::config::ChatsyncConfig;

/// Report the effective configuration and flag anything a sync run
/// would trip over. Offline; performs no remote calls.
pub fn run(cfg: &ChatsyncConfig) -> Result<CommandReport> {
    let mut report = CommandReport::new("status");

    report.detail(format!("db_path={}", cfg.chat.db_path));
    report.detail(format!("chat_id={}", cfg.chat.chat_id));
    report.detail(format!("link_filter={}", cfg.chat.link_filter));
    report.detail(format!("playlist_name={}", cfg.sync.playlist_name));
    report.detail(format!("api_base={}", cfg.spotify.api_base));
    report.detail(format!("accounts_base={}", cfg.spotify.accounts_base));

    if !Path::new(&cfg.chat.db_path).is_file() {
        report.issue(format!("chat db not found at {}", cfg.chat.db_path));
    }
    if cfg.chat.chat_id.trim().is_empty() {
        report.issue("no chat id configured (set [chat] chat_id or CHATSYNC_CHAT_ID)");
    }
    if cfg.sync.playlist_name.trim().is_empty() {
        report.issue(
            "no playlist name configured (set [sync] playlist_name or CHATSYNC_PLAYLIST_NAME)",
        );
    }
    if cfg.spotify.client_id.trim().is_empty()
        || cfg.spotify.client_secret.trim().is_empty()
        || cfg.spotify.refresh_token.trim().is_empty()
    {
        report.issue("spotify credentials incomplete (need client_id, client_secret, refresh_token)");
    }

    Ok(report)
}
