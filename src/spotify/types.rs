use serde::Deserialize;
use std::fmt;

/// Opaque Spotify track identifier, e.g. `6rqhFgbbKwnb9MLmUQDhG6`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(pub String);

impl TrackId {
    /// The `spotify:track:<id>` form the write endpoint expects.
    pub fn to_uri(&self) -> String {
        format!("spotify:track:{}", self.0)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque Spotify playlist identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistId(pub String);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a paged listing: `{ items: [...], next: url-or-null }`.
/// `next` is used only as a continuation signal; the cursor itself is a
/// numeric offset advanced by the page size.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

/// An entry of a playlist's track listing. `track` is null for removed
/// or local items; those contribute nothing to the membership set.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackRef {
    pub id: Option<String>,
}
