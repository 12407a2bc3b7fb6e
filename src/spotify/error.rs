use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("no playlist matching {name:?} was found")]
    NoMatchFound { name: String },
    #[error("expected 1 playlist matching {name:?} but found {count}")]
    AmbiguousMatch { name: String, count: usize },
    #[error("malformed response from spotify api: {0}")]
    MalformedResponse(String),
    #[error("spotify api returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("spotify token exchange failed: {0}")]
    Auth(String),
    #[error("http request failed")]
    Http(#[from] reqwest::Error),
}
