use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;

use super::error::SpotifyError;
use super::paging::{PAGE_LIMIT, fetch_all_pages, submit_in_chunks};
use super::types::{Page, PlaylistId, PlaylistItem, PlaylistSummary, TrackId};
use crate::config::SpotifyConfig;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated blocking client for the Spotify Web API. Constructed
/// from an explicit credentials struct; the refresh token is exchanged
/// for a bearer access token once, at construction.
pub struct SpotifyClient {
    http: Client,
    access_token: String,
    api_base: String,
}

impl SpotifyClient {
    pub fn connect(cfg: &SpotifyConfig) -> Result<Self, SpotifyError> {
        if cfg.client_id.trim().is_empty()
            || cfg.client_secret.trim().is_empty()
            || cfg.refresh_token.trim().is_empty()
        {
            return Err(SpotifyError::Auth(
                "missing credentials: set client_id, client_secret and refresh_token".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let token_url = format!("{}/api/token", cfg.accounts_base.trim_end_matches('/'));
        let response = http
            .post(&token_url)
            .basic_auth(cfg.client_id.trim(), Some(cfg.client_secret.trim()))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", cfg.refresh_token.trim()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SpotifyError::Auth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }
        let token: TokenResponse = response
            .json()
            .map_err(|err| SpotifyError::Auth(format!("invalid token response: {err}")))?;

        Ok(Self {
            http,
            access_token: token.access_token,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        offset: usize,
    ) -> Result<Page<T>, SpotifyError> {
        let url = format!("{}{path}", self.api_base);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("limit", PAGE_LIMIT), ("offset", offset)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .map_err(|err| SpotifyError::MalformedResponse(err.to_string()))
    }

    /// Resolve a playlist among the current user's playlists by
    /// case-sensitive substring match on the name. All pages are
    /// exhausted before the match count is judged, so a duplicate on a
    /// later page cannot hide behind an early match.
    pub fn playlist_id_by_name(&self, name: &str) -> Result<PlaylistId, SpotifyError> {
        let playlists: Vec<PlaylistSummary> =
            fetch_all_pages(|offset| self.get_page("/v1/me/playlists", offset))?;
        select_single_match(name, playlists)
    }

    /// The full set of track IDs currently on the playlist. An empty
    /// playlist yields an empty set.
    pub fn playlist_track_ids(
        &self,
        playlist: &PlaylistId,
    ) -> Result<HashSet<TrackId>, SpotifyError> {
        let path = format!("/v1/playlists/{playlist}/tracks");
        let items: Vec<PlaylistItem> = fetch_all_pages(|offset| self.get_page(&path, offset))?;
        Ok(items
            .into_iter()
            .filter_map(|item| item.track)
            .filter_map(|track| track.id)
            .map(TrackId)
            .collect())
    }

    /// Add tracks to the playlist in chunks of at most 100 per call.
    /// No call is made for an empty batch. Returns the number of tracks
    /// actually submitted; a mid-batch failure propagates with earlier
    /// chunks already landed.
    pub fn add_tracks(
        &self,
        playlist: &PlaylistId,
        tracks: &[TrackId],
    ) -> Result<usize, SpotifyError> {
        let url = format!("{}/v1/playlists/{playlist}/tracks", self.api_base);
        submit_in_chunks(tracks, PAGE_LIMIT, |chunk| {
            let uris: Vec<String> = chunk.iter().map(TrackId::to_uri).collect();
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(&serde_json::json!({ "uris": uris }))
                .send()?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().unwrap_or_default();
                return Err(SpotifyError::Api {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(())
        })
    }
}

/// Exactly-one semantics over the accumulated matches: zero and
/// more-than-one are error states, never silently resolved.
fn select_single_match(
    name: &str,
    playlists: Vec<PlaylistSummary>,
) -> Result<PlaylistId, SpotifyError> {
    let mut matches: Vec<PlaylistSummary> = playlists
        .into_iter()
        .filter(|playlist| playlist.name.contains(name))
        .collect();

    match matches.len() {
        0 => Err(SpotifyError::NoMatchFound {
            name: name.to_string(),
        }),
        1 => Ok(PlaylistId(matches.remove(0).id)),
        count => Err(SpotifyError::AmbiguousMatch {
            name: name.to_string(),
            count,
        }),
    }
}
