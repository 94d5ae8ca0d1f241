use tracing::warn;

use factfeed_store::FactStore;
use factfeed_types::{Fact, FactId, VoteKind};

use crate::error::FeedError;
use crate::feed::Feed;

impl<S: FactStore> Feed<S> {
    /// Cast one vote on a visible fact. The per-fact in-flight guard is
    /// the disabled-buttons rule: a second vote for the same fact is
    /// refused until the first resolves. Votes on different facts may
    /// overlap freely; each patches only its own entry.
    pub async fn cast_vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, FeedError> {
        {
            let mut state = self.lock_state();
            if !state.facts.iter().any(|f| f.id == id) {
                return Err(FeedError::UnknownFact(id));
            }
            if !state.voting.insert(id) {
                return Err(FeedError::VoteBusy(id));
            }
        }

        let result = self.store().increment_vote(id, kind).await;

        let mut state = self.lock_state();
        state.voting.remove(&id);
        match result {
            Ok(updated) => {
                // The store's row is canonical; patch only the matching entry.
                if let Some(slot) = state.facts.iter_mut().find(|f| f.id == updated.id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(e) => {
                warn!(id, error = %e, "vote failed");
                Err(FeedError::Vote(e))
            }
        }
    }
}
