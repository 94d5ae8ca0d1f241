use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use factfeed_types::{CategoryFilter, Fact, FactId, NewFact, VoteKind};

use crate::FactStore;
use crate::error::StoreError;

/// In-memory `FactStore` with the same observable semantics as the REST
/// service: store-assigned ids, stamped timestamps, zeroed counters on
/// insert, increments applied under a lock. Backs tests and offline runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: FactId,
    rows: Vec<Fact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with rows, keeping the ids the caller chose. The id
    /// counter continues past the highest seeded id.
    pub fn seeded(rows: Vec<Fact>) -> Self {
        let next_id = rows.iter().map(|f| f.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner { next_id, rows }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Internal(format!("store lock poisoned: {e}")))
    }
}

#[async_trait]
impl FactStore for MemoryStore {
    async fn list_facts(
        &self,
        filter: &CategoryFilter,
        limit: u32,
    ) -> Result<Vec<Fact>, StoreError> {
        let inner = self.lock()?;
        let mut rows: Vec<Fact> = inner
            .rows
            .iter()
            .filter(|f| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Named(name) => f.category == *name,
            })
            .cloned()
            .collect();
        rows.sort_by_key(|f| f.votes_interesting);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn insert_fact(&self, draft: &NewFact) -> Result<Fact, StoreError> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let fact = Fact {
            id: inner.next_id,
            created_at: Utc::now(),
            text: draft.text.clone(),
            source: draft.source.clone(),
            category: draft.category.clone(),
            votes_interesting: 0,
            votes_mindblowing: 0,
            votes_false: 0,
        };
        inner.rows.push(fact.clone());
        Ok(fact)
    }

    async fn increment_vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError> {
        let mut inner = self.lock()?;
        let row = inner
            .rows
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(StoreError::NotFound(id))?;
        match kind {
            VoteKind::Interesting => row.votes_interesting += 1,
            VoteKind::Mindblowing => row.votes_mindblowing += 1,
            VoteKind::False => row.votes_false += 1,
        }
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_fact(id: FactId, category: &str, interesting: u32) -> Fact {
        Fact {
            id,
            created_at: Utc::now(),
            text: format!("fact {id}"),
            source: "https://example.com".into(),
            category: category.into(),
            votes_interesting: interesting,
            votes_mindblowing: 0,
            votes_false: 0,
        }
    }

    fn draft(category: &str) -> NewFact {
        NewFact {
            text: "Bats are not blind".into(),
            source: "https://example.com".into(),
            category: category.into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_zeroes_counters() {
        let store = MemoryStore::new();
        let first = store.insert_fact(&draft("science")).await.unwrap();
        let second = store.insert_fact(&draft("history")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(
            (first.votes_interesting, first.votes_mindblowing, first.votes_false),
            (0, 0, 0)
        );
    }

    #[tokio::test]
    async fn seeded_ids_are_not_reissued() {
        let store = MemoryStore::seeded(vec![seeded_fact(41, "science", 0)]);
        let inserted = store.insert_fact(&draft("science")).await.unwrap();
        assert_eq!(inserted.id, 42);
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let store = MemoryStore::seeded(vec![
            seeded_fact(1, "science", 0),
            seeded_fact(2, "history", 0),
            seeded_fact(3, "science", 0),
        ]);

        let science = store
            .list_facts(&CategoryFilter::named("science"), 100)
            .await
            .unwrap();
        assert_eq!(science.len(), 2);
        assert!(science.iter().all(|f| f.category == "science"));

        let all = store.list_facts(&CategoryFilter::All, 100).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn list_orders_by_interesting_votes_ascending_and_caps() {
        let store = MemoryStore::seeded(vec![
            seeded_fact(1, "science", 9),
            seeded_fact(2, "science", 1),
            seeded_fact(3, "science", 5),
        ]);

        let rows = store.list_facts(&CategoryFilter::All, 100).await.unwrap();
        let votes: Vec<u32> = rows.iter().map(|f| f.votes_interesting).collect();
        assert_eq!(votes, vec![1, 5, 9]);

        let capped = store.list_facts(&CategoryFilter::All, 2).await.unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[1].votes_interesting, 5);
    }

    #[tokio::test]
    async fn increment_bumps_exactly_one_counter() {
        let store = MemoryStore::seeded(vec![seeded_fact(7, "science", 4)]);

        let updated = store.increment_vote(7, VoteKind::False).await.unwrap();
        assert_eq!(updated.votes_false, 1);
        assert_eq!(updated.votes_interesting, 4);
        assert_eq!(updated.votes_mindblowing, 0);

        let again = store.increment_vote(7, VoteKind::False).await.unwrap();
        assert_eq!(again.votes_false, 2);
    }

    #[tokio::test]
    async fn increment_on_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.increment_vote(99, VoteKind::Interesting).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(99)));
    }
}
