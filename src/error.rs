use thiserror::Error;

/// Failures while retrieving the statistics feed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Couldn't connect to API")]
    Network(#[source] reqwest::Error),

    #[error("Couldn't Read Body")]
    Body(#[source] reqwest::Error),

    #[error("Couldn't Unmarshall the JSON")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True for transport-level failures, false when the feed answered with bad data.
    pub fn is_network(&self) -> bool {
        !matches!(self, FetchError::Decode(_))
    }
}

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// No record in the snapshot matched the requested region.
    #[error("Invalid Command Entered. {code}{prefix}")]
    RegionNotFound { code: String, prefix: String },
}
