use super::types::TrackId;

const URL_PREFIX: &str = "http";
const URI_PREFIX: &str = "spotify:";
const TRACK_KIND: &str = "track";

/// Convert an item reference in any accepted surface form into a
/// canonical track ID:
///
/// - `http://open.spotify.com/track/6rqh...?si=1` — last path segment,
///   query string stripped; URLs of other resource kinds (playlists,
///   albums) are skipped
/// - `spotify:track:6rqh...` — last colon-separated component
/// - `6rqh...` — already canonical, passed through
///
/// Unparseable or off-kind references yield `None`; this function
/// filters rather than fails.
pub fn normalize(reference: &str) -> Option<TrackId> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    if reference.starts_with(URL_PREFIX) {
        if !reference.contains(TRACK_KIND) {
            return None;
        }
        let last_segment = reference.rsplit('/').next()?;
        let id = last_segment.split('?').next()?;
        if id.is_empty() {
            return None;
        }
        return Some(TrackId(id.to_string()));
    }

    if reference.starts_with(URI_PREFIX) {
        let id = reference.rsplit(':').next()?;
        if id.is_empty() {
            return None;
        }
        return Some(TrackId(id.to_string()));
    }

    Some(TrackId(reference.to_string()))
}

/// Normalize a batch of references, dropping anything that does not
/// resolve to a track.
pub fn normalize_all<'a>(references: impl IntoIterator<Item = &'a str>) -> Vec<TrackId> {
    references.into_iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_form_strips_path_and_query() {
        let got = normalize("http://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6?si=1");
        assert_eq!(got, Some(TrackId("6rqhFgbbKwnb9MLmUQDhG6".to_string())));
    }

    #[test]
    fn url_form_without_query_keeps_last_segment() {
        let got = normalize("https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6");
        assert_eq!(got, Some(TrackId("6rqhFgbbKwnb9MLmUQDhG6".to_string())));
    }

    #[test]
    fn uri_form_takes_last_component() {
        let got = normalize("spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
        assert_eq!(got, Some(TrackId("6rqhFgbbKwnb9MLmUQDhG6".to_string())));
    }

    #[test]
    fn bare_id_passes_through() {
        let got = normalize("6rqhFgbbKwnb9MLmUQDhG6");
        assert_eq!(got, Some(TrackId("6rqhFgbbKwnb9MLmUQDhG6".to_string())));
    }

    #[test]
    fn playlist_url_is_skipped() {
        assert_eq!(normalize("http://open.spotify.com/playlist/XYZ"), None);
        assert_eq!(normalize("https://open.spotify.com/album/XYZ?si=2"), None);
    }

    #[test]
    fn all_forms_of_one_track_normalize_identically() {
        let forms = [
            "http://open.spotify.com/track/ABC?si=1",
            "spotify:track:ABC",
            "ABC",
        ];
        let ids = normalize_all(forms);
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| id == &TrackId("ABC".to_string())));
    }

    #[test]
    fn degenerate_references_are_dropped() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("http://open.spotify.com/track/"), None);
    }

    #[test]
    fn batch_normalize_drops_off_kind_references() {
        let got = normalize_all([
            "spotify:track:AAA",
            "http://open.spotify.com/playlist/P1",
            "BBB",
        ]);
        assert_eq!(
            got,
            vec![TrackId("AAA".to_string()), TrackId("BBB".to_string())]
        );
    }
}
