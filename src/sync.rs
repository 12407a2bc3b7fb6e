use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::chatdb::ChatDb;
use crate::config::ChatsyncConfig;
use crate::logging;
use crate::spotify::normalize::normalize_all;
use crate::spotify::{PlaylistId, SpotifyClient, TrackId};

/// Pure set difference: the candidates not already present remotely.
/// No ordering guarantee; recency ordering from the chat db is
/// intentionally discarded at this stage.
pub fn reconcile(
    candidates: &HashSet<TrackId>,
    existing: &HashSet<TrackId>,
) -> HashSet<TrackId> {
    candidates.difference(existing).cloned().collect()
}

#[derive(Debug)]
pub struct SyncOutcome {
    pub playlist: PlaylistId,
    pub links_found: usize,
    pub candidates: usize,
    pub already_present: usize,
    pub pending: usize,
    pub added: usize,
}

/// One full reconciliation run: chat links → canonical IDs → resolve
/// playlist → fetch membership → set difference → chunked writes.
/// Every run rebuilds its sets from scratch; re-running after a partial
/// write converges because already-landed tracks drop out of the delta.
pub fn run_sync(cfg: &ChatsyncConfig, dry_run: bool) -> Result<SyncOutcome> {
    let chat_id = cfg.require_chat_id()?;
    let playlist_name = cfg.require_playlist_name()?;
    logging::note(&format!(
        "syncing chat {chat_id} into playlist {playlist_name:?}"
    ));

    let db = ChatDb::open(Path::new(&cfg.chat.db_path))?;
    let links = db.links_from_chat(chat_id, &cfg.chat.link_filter)?;
    logging::count("links from chat db", links.len());

    let candidates: HashSet<TrackId> = normalize_all(links.iter().map(String::as_str))
        .into_iter()
        .collect();

    let client = SpotifyClient::connect(&cfg.spotify).context("failed to connect to spotify")?;
    let playlist = client
        .playlist_id_by_name(playlist_name)
        .with_context(|| format!("failed to resolve playlist {playlist_name:?}"))?;

    let existing = client
        .playlist_track_ids(&playlist)
        .context("failed to fetch playlist contents")?;
    logging::count("item ids currently on playlist", existing.len());

    let delta = reconcile(&candidates, &existing);
    logging::count("songs being added to playlist", delta.len());

    let pending: Vec<TrackId> = delta.into_iter().collect();
    let added = if dry_run {
        0
    } else {
        client
            .add_tracks(&playlist, &pending)
            .context("failed to add tracks to playlist")?
    };

    Ok(SyncOutcome {
        playlist,
        links_found: links.len(),
        candidates: candidates.len(),
        already_present: existing.len(),
        pending: pending.len(),
        added,
    })
}
