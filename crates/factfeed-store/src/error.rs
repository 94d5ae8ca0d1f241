use factfeed_types::FactId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote store rejected the request ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("remote store returned no rows")]
    EmptyReply,

    #[error("no fact with id {0}")]
    NotFound(FactId),

    #[error("internal store error: {0}")]
    Internal(String),
}
