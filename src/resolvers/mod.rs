//! External collaborators the analysis core talks to
//!
//! Both collaborators sit behind traits so the crawler and aggregator can be
//! driven by in-memory fakes in tests.

pub mod go_list;
pub mod oracle;

use crate::error::Result;
use crate::models::{PackageInfo, SemanticOutcome, SemanticQueryKey};

pub use go_list::GoListResolver;
pub use oracle::OracleProcess;

/// Answers "what does this package import, and is it a standard package"
pub trait ImportResolver: Send + Sync {
    /// Resolve one package. Failure is fatal for the whole run.
    fn resolve(&self, path: &str) -> Result<PackageInfo>;
}

/// Answers one describe/definition query at a byte offset
pub trait SemanticBackend: Send + Sync {
    /// Run one external query. Never memoized here; see `SemanticCache`.
    fn query(&self, key: &SemanticQueryKey) -> SemanticOutcome;
}
