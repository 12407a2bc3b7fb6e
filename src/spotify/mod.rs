pub mod client;
pub mod error;
pub mod normalize;
pub mod paging;
pub mod types;

pub use client::SpotifyClient;
pub use types::{PlaylistId, TrackId};
