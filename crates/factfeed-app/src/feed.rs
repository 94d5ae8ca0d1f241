use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use factfeed_store::FactStore;
use factfeed_types::{CategoryFilter, CategoryTable, Fact, FactId};

use crate::error::FeedError;

/// Feed fetches are capped at this many rows.
pub const FEED_LIMIT: u32 = 100;

/// Owns the visible fact list, the active category selection, and the busy
/// flags. All remote work goes through the injected store; local state is
/// touched before a request starts and after it resolves, never while one
/// is in flight.
pub struct Feed<S> {
    store: S,
    categories: CategoryTable,
    limit: u32,
    state: Mutex<FeedState>,
    fetch_seq: AtomicU64,
}

#[derive(Debug, Default)]
pub(crate) struct FeedState {
    pub(crate) facts: Vec<Fact>,
    pub(crate) selection: CategoryFilter,
    pub(crate) loading: bool,
    pub(crate) uploading: bool,
    pub(crate) voting: HashSet<FactId>,
}

/// Cloned view of the feed for rendering.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub facts: Vec<Fact>,
    pub selection: CategoryFilter,
    pub loading: bool,
    pub uploading: bool,
    /// Ids with a vote currently in flight (their buttons are disabled).
    pub voting: Vec<FactId>,
}

/// How a fetch resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedUpdate {
    /// The visible list was replaced with the fetched rows.
    Replaced { count: usize },
    /// A newer fetch was issued while this one was in flight; the stale
    /// response was discarded.
    Superseded,
}

impl<S: FactStore> Feed<S> {
    pub fn new(store: S, categories: CategoryTable) -> Self {
        Self::with_limit(store, categories, FEED_LIMIT)
    }

    pub fn with_limit(store: S, categories: CategoryTable, limit: u32) -> Self {
        Self {
            store,
            categories,
            limit,
            state: Mutex::new(FeedState::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.lock_state();
        let mut voting: Vec<FactId> = state.voting.iter().copied().collect();
        voting.sort_unstable();
        FeedSnapshot {
            facts: state.facts.clone(),
            selection: state.selection.clone(),
            loading: state.loading,
            uploading: state.uploading,
            voting,
        }
    }

    /// The visible list as last rendered: the most recent successful fetch
    /// plus any locally-applied successful mutations since.
    pub fn facts(&self) -> Vec<Fact> {
        self.lock_state().facts.clone()
    }

    /// Switch the active category and replace the visible list with a
    /// fresh scoped fetch. Latest request wins: when fetches overlap, only
    /// the most recently issued one may touch the list, and it also owns
    /// the loading flag.
    pub async fn select_category(
        &self,
        selection: CategoryFilter,
    ) -> Result<FeedUpdate, FeedError> {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock_state();
            state.selection = selection.clone();
            state.loading = true;
        }

        let result = self.store.list_facts(&selection, self.limit).await;

        let mut state = self.lock_state();
        if seq != self.fetch_seq.load(Ordering::SeqCst) {
            debug!(%selection, seq, "discarding superseded fetch");
            return Ok(FeedUpdate::Superseded);
        }
        state.loading = false;
        match result {
            Ok(rows) => {
                let count = rows.len();
                debug!(%selection, count, "visible list replaced");
                state.facts = rows;
                Ok(FeedUpdate::Replaced { count })
            }
            Err(e) => Err(FeedError::Fetch(e)),
        }
    }

    /// Re-run the fetch for the current selection.
    pub async fn refresh(&self) -> Result<FeedUpdate, FeedError> {
        let selection = self.lock_state().selection.clone();
        self.select_category(selection).await
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn lock_state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
