use thiserror::Error;

/// Any transport failure, timeout or non-success status from the upstream
/// feed. A single attempt per window is the contract; the operator decides
/// whether to re-request.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("feed returned status {0}")]
    Unavailable(reqwest::StatusCode),
}

impl FeedError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FeedError::Unavailable(_))
    }
}
