use anyhow::Result;
use std::path::Path;

use crate::chatdb::ChatDb;
use crate::commands::CommandReport;
use crate::config::ChatsyncConfig;
use crate::logging;
use crate::spotify::normalize::normalize;

/// Extract and print the filtered links from the chat db. Offline;
/// needs no Spotify credentials.
pub fn run(cfg: &ChatsyncConfig) -> Result<CommandReport> {
    let chat_id = cfg.require_chat_id()?;
    let mut report = CommandReport::new("links");

    let db = ChatDb::open(Path::new(&cfg.chat.db_path))?;
    let links: Vec<(String, String)> = db
        .attachment_messages(chat_id)?
        .into_iter()
        .filter(|row| row.has_attachment)
        .filter_map(|row| {
            let date = row.date;
            row.text.map(|text| (date, text))
        })
        .filter(|(_, text)| text.contains(&cfg.chat.link_filter))
        .collect();
    logging::count("links from chat db", links.len());

    for (date, link) in &links {
        match normalize(link) {
            Some(id) => report.detail(format!("{date} {link} -> {id}")),
            None => report.detail(format!("{date} {link} -> skipped")),
        }
    }

    Ok(report)
}
