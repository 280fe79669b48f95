//! Memoizing front for the semantic backend
//!
//! Each distinct [`SemanticQueryKey`] reaches the backend at most once per
//! cache. Concurrent callers asking for the same key wait on the first call
//! and all receive a clone of its outcome, success or failure.

use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use crate::models::{SemanticOutcome, SemanticQueryKey};
use crate::resolvers::SemanticBackend;

/// Counters describing how the cache was used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Backend invocations actually performed
    pub executions: usize,
    /// Requests answered from memory
    pub hits: usize,
}

impl CacheStats {
    /// Share of requests served without invoking the backend
    pub fn hit_rate(&self) -> f64 {
        let total = self.executions + self.hits;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Single-execution-per-key cache over a [`SemanticBackend`]
pub struct SemanticCache {
    backend: Arc<dyn SemanticBackend>,
    entries: DashMap<SemanticQueryKey, Arc<OnceLock<SemanticOutcome>>>,
    executions: AtomicUsize,
    hits: AtomicUsize,
}

impl SemanticCache {
    pub fn new(backend: Arc<dyn SemanticBackend>) -> Self {
        Self {
            backend,
            entries: DashMap::new(),
            executions: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
        }
    }

    /// Answer `key`, invoking the backend only if no caller has done so yet
    pub fn resolve(&self, key: SemanticQueryKey) -> SemanticOutcome {
        // The shard guard must be released before waiting on the cell.
        let cell = Arc::clone(&self.entries.entry(key.clone()).or_default());

        let mut executed = false;
        let outcome = cell.get_or_init(|| {
            executed = true;
            self.executions.fetch_add(1, Ordering::Relaxed);
            self.backend.query(&key)
        });

        if !executed {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        outcome.clone()
    }

    /// Number of distinct keys requested so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            executions: self.executions.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }
}
