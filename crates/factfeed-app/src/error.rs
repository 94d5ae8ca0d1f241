use factfeed_store::StoreError;
use factfeed_types::{FactId, InvalidFact};
use thiserror::Error;

/// Discriminated outcome for every user-initiated operation. Read and
/// write paths report failure the same way; nothing is swallowed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not load facts: {0}")]
    Fetch(#[source] StoreError),

    #[error(transparent)]
    Invalid(#[from] InvalidFact),

    #[error("a submission is already in flight")]
    SubmitBusy,

    #[error("fact {0} is not in the visible list")]
    UnknownFact(FactId),

    #[error("a vote for fact {0} is already in flight")]
    VoteBusy(FactId),

    #[error("could not save the fact: {0}")]
    Insert(#[source] StoreError),

    #[error("could not record the vote: {0}")]
    Vote(#[source] StoreError),
}
