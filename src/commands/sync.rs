use anyhow::Result;

use crate::commands::CommandReport;
use crate::config::ChatsyncConfig;
use crate::sync::run_sync;

#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub dry_run: bool,
}

pub fn run(cfg: &ChatsyncConfig, opts: &SyncOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("sync");

    let outcome = run_sync(cfg, opts.dry_run)?;

    report.detail(format!("playlist_id={}", outcome.playlist));
    report.detail(format!("links_found={}", outcome.links_found));
    report.detail(format!("candidates={}", outcome.candidates));
    report.detail(format!("already_present={}", outcome.already_present));
    report.detail(format!("pending={}", outcome.pending));
    if opts.dry_run {
        report.detail("dry run: no tracks were added");
    } else {
        report.detail(format!("added={}", outcome.added));
    }

    Ok(report)
}
