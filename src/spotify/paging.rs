use super::error::SpotifyError;
use super::types::Page;

/// Server page size for listings and the per-call cap on writes.
pub const PAGE_LIMIT: usize = 100;

/// Drain a paged listing into a single vec. `fetch_page` is called with
/// an offset advanced by [`PAGE_LIMIT`] per page; the absence of a
/// next-page link on the returned page is the sole exit signal, so all
/// pages are examined before the caller gets to decide anything.
///
/// A server that keeps reporting a next link while yielding no items
/// can never terminate this loop; that is surfaced as a protocol
/// violation instead of paginating forever.
pub fn fetch_all_pages<T, F>(mut fetch_page: F) -> Result<Vec<T>, SpotifyError>
where
    F: FnMut(usize) -> Result<Page<T>, SpotifyError>,
{
    let mut collected = Vec::new();
    let mut offset = 0usize;
    loop {
        let page = fetch_page(offset)?;
        let has_next = page.next.is_some();
        if has_next && page.items.is_empty() {
            return Err(SpotifyError::MalformedResponse(format!(
                "page at offset {offset} reported a next link but no items"
            )));
        }
        collected.extend(page.items);
        if !has_next {
            break;
        }
        offset += PAGE_LIMIT;
    }
    Ok(collected)
}

/// Submit `items` in prefix chunks of at most `cap`, in order. An empty
/// input performs no calls. The first failed submission propagates;
/// earlier chunks have already landed and later ones are never attempted.
/// Returns the number of items submitted.
pub fn submit_in_chunks<T, F>(items: &[T], cap: usize, mut submit: F) -> Result<usize, SpotifyError>
where
    F: FnMut(&[T]) -> Result<(), SpotifyError>,
{
    let mut submitted = 0usize;
    for chunk in items.chunks(cap) {
        submit(chunk)?;
        submitted += chunk.len();
    }
    Ok(submitted)
}
