//! Parallel processing utilities

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, SymgraphError};

/// Progress update information for long-running phases
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Build the bounded pool that semantic queries run on
pub fn query_pool(workers: usize) -> Result<ThreadPool> {
    if workers == 0 {
        return Err(SymgraphError::WorkerPool {
            message: "worker count must be at least 1".to_string(),
        });
    }

    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("symgraph-query-{}", index))
        .build()
        .map_err(|e| SymgraphError::WorkerPool {
            message: e.to_string(),
        })
}
