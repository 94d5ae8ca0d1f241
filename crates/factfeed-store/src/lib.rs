pub mod error;
pub mod memory;
pub mod rest;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use factfeed_types::{CategoryFilter, Fact, FactId, NewFact, VoteKind};

/// The remote `facts` collection, behind a seam so the feed logic can run
/// against the hosted REST service or an in-memory stand-in.
#[async_trait]
pub trait FactStore: Send + Sync {
    /// All columns, optionally filtered to one category, ordered by the
    /// interesting-vote counter ascending, capped at `limit` rows.
    async fn list_facts(
        &self,
        filter: &CategoryFilter,
        limit: u32,
    ) -> Result<Vec<Fact>, StoreError>;

    /// Write one `{text, source, category}` row and return the stored
    /// representation; the store assigns the id and zeroes the counters.
    async fn insert_fact(&self, draft: &NewFact) -> Result<Fact, StoreError>;

    /// Add one to the named counter on the matching row, atomically on the
    /// store side, and return the updated row.
    async fn increment_vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError>;
}

#[async_trait]
impl<T: FactStore + ?Sized> FactStore for std::sync::Arc<T> {
    async fn list_facts(
        &self,
        filter: &CategoryFilter,
        limit: u32,
    ) -> Result<Vec<Fact>, StoreError> {
        (**self).list_facts(filter, limit).await
    }

    async fn insert_fact(&self, draft: &NewFact) -> Result<Fact, StoreError> {
        (**self).insert_fact(draft).await
    }

    async fn increment_vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError> {
        (**self).increment_vote(id, kind).await
    }
}
