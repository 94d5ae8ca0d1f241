use tracing::{debug, warn};

use factfeed_store::FactStore;
use factfeed_types::{Fact, NewFact};

use crate::error::FeedError;
use crate::feed::Feed;

impl<S: FactStore> Feed<S> {
    /// Validate and persist a draft. On success the canonical stored row
    /// is prepended to the visible list. The draft is consumed either way,
    /// so the caller's input fields start over empty regardless of
    /// outcome.
    pub async fn submit_fact(&self, draft: NewFact) -> Result<Fact, FeedError> {
        draft.validate(self.categories())?;

        {
            let mut state = self.lock_state();
            if state.uploading {
                return Err(FeedError::SubmitBusy);
            }
            state.uploading = true;
        }

        let result = self.store().insert_fact(&draft).await;

        let mut state = self.lock_state();
        state.uploading = false;
        match result {
            Ok(fact) => {
                debug!(id = fact.id, category = %fact.category, "fact stored");
                state.facts.insert(0, fact.clone());
                Ok(fact)
            }
            Err(e) => {
                warn!(error = %e, "insert failed");
                Err(FeedError::Insert(e))
            }
        }
    }
}
