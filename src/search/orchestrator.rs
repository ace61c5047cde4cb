//! Query orchestrator: debounce, source selection, stale-response guard.
//!
//! The orchestrator owns the single [`FilterState`] and the cached full
//! feed. Every filter edit restarts a cancellable debounce timer; when
//! the timer fires, the criteria decide whether the base set comes from
//! the remote search endpoint or from the local cache, and the filter
//! composer is then re-applied in full either way (the remote end is not
//! guaranteed to honor every criterion).
//!
//! Each dispatched request carries a monotonically increasing sequence
//! number. A response mutates visible state only if its number is still
//! the highest dispatched, so a slow early response can never overwrite
//! a faster later one. Dispatching a new request invalidates in-flight
//! predecessors through that check; it does not abort them.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::EngineError;
use crate::model::{Difficulty, Recipe, SortKey};
use crate::remote::SearchRequest;
use crate::search::filter::FilterState;

/// Where base record sets come from. Implemented by the HTTP client and
/// by scripted sources in tests.
pub trait RecipeSource: Send + Sync + 'static {
    /// Full feed, no criteria applied.
    fn fetch_feed(&self) -> impl Future<Output = Result<Vec<Recipe>, EngineError>> + Send;

    /// Remotely ranked search for the given request snapshot.
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<Recipe>, EngineError>> + Send;
}

/// What the rendering layer observes.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Final, filtered and sorted result set.
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    /// Last collaborator failure, retryable by the next edit. The
    /// previous result set is retained alongside it.
    pub error: Option<String>,
}

#[derive(Default)]
struct Shared {
    filter: FilterState,
    feed: Vec<Recipe>,
}

struct Inner<S> {
    source: S,
    debounce: Duration,
    /// Highest sequence number dispatched so far.
    seq: AtomicU64,
    shared: Mutex<Shared>,
    debounce_task: Mutex<Option<JoinHandle<()>>>,
    tx: watch::Sender<SearchState>,
}

/// Handle to the engine; cheap to clone, all clones share state.
pub struct SearchOrchestrator<S: RecipeSource> {
    inner: Arc<Inner<S>>,
}

impl<S: RecipeSource> Clone for SearchOrchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RecipeSource> SearchOrchestrator<S> {
    pub fn new(source: S, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(SearchState::default());
        Self {
            inner: Arc::new(Inner {
                source,
                debounce,
                seq: AtomicU64::new(0),
                shared: Mutex::new(Shared::default()),
                debounce_task: Mutex::new(None),
                tx,
            }),
        }
    }

    /// Observe result-set changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.tx.subscribe()
    }

    /// Snapshot of the current criteria.
    pub fn filter(&self) -> FilterState {
        self.inner.shared.lock().filter.clone()
    }

    /// Mutate the criteria and restart the debounce window.
    pub fn edit(&self, f: impl FnOnce(&mut FilterState)) {
        {
            let mut shared = self.inner.shared.lock();
            f(&mut shared.filter);
        }
        self.schedule();
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.edit(move |f| f.query = query);
    }

    pub fn set_difficulty(&self, difficulty: Difficulty) {
        self.edit(move |f| f.difficulty = difficulty);
    }

    pub fn set_max_time(&self, minutes: Option<u32>) {
        self.edit(move |f| f.max_time_minutes = minutes);
    }

    pub fn set_sort(&self, sort: SortKey) {
        self.edit(move |f| f.sort = sort);
    }

    pub fn set_include_list(&self, raw: &str) {
        let raw = raw.to_string();
        self.edit(move |f| f.set_include_list(&raw));
    }

    pub fn set_exclude_list(&self, raw: &str) {
        let raw = raw.to_string();
        self.edit(move |f| f.set_exclude_list(&raw));
    }

    pub fn reset(&self) {
        self.edit(FilterState::reset);
    }

    /// Re-fetch the full feed (initial load, pull-to-refresh). Replaces
    /// the cache and re-applies the current criteria; no debounce, but
    /// the same sequence guard as every other dispatch.
    pub fn refresh_feed(&self) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let seq = inner.seq.fetch_add(1, Ordering::SeqCst) + 1;
            inner.tx.send_modify(|s| s.loading = true);
            tracing::info!(seq, "feed_refresh");
            let outcome = inner.source.fetch_feed().await;
            let filter = {
                let mut shared = inner.shared.lock();
                if let Ok(feed) = &outcome {
                    shared.feed = feed.clone();
                }
                shared.filter.clone()
            };
            inner.apply(seq, &filter, outcome);
        });
    }

    /// Cancel-then-reschedule: the pending timer (if any) is aborted and
    /// a fresh debounce window starts. Atomic from the caller's view.
    fn schedule(&self) {
        let mut slot = self.inner.debounce_task.lock();
        if let Some(pending) = slot.take() {
            pending.abort();
        }
        let inner = Arc::clone(&self.inner);
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            // Dispatch in its own task so that aborting the next timer
            // can never kill an already in-flight request.
            tokio::spawn(Arc::clone(&inner).dispatch());
        }));
    }
}

impl<S: RecipeSource> Inner<S> {
    async fn dispatch(self: Arc<Self>) {
        let (filter, request) = {
            let shared = self.shared.lock();
            let filter = shared.filter.clone();
            let request = SearchRequest::from_filter(&filter);
            (filter, request)
        };
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_modify(|s| s.loading = true);

        let outcome = if filter.is_remote_eligible() {
            tracing::info!(seq, backend = "remote", q = %request.q, "search_dispatch");
            self.source.search(&request).await
        } else {
            tracing::info!(seq, backend = "local", "search_dispatch");
            let feed = { self.shared.lock().feed.clone() };
            Ok(feed)
        };

        self.apply(seq, &filter, outcome);
    }

    /// Single point where a response may mutate visible state.
    fn apply(&self, seq: u64, filter: &FilterState, outcome: Result<Vec<Recipe>, EngineError>) {
        let _shared = self.shared.lock();
        if seq != self.seq.load(Ordering::SeqCst) {
            tracing::debug!(seq, "stale_response_dropped");
            return;
        }
        match outcome {
            Ok(base) => {
                let recipes = filter.apply(&base);
                tracing::info!(seq, count = recipes.len(), "search_apply");
                self.tx.send_replace(SearchState {
                    recipes,
                    loading: false,
                    error: None,
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "search_failed");
                self.tx.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(err.to_string());
                });
            }
        }
    }
}
