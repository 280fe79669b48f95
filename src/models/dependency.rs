//! Symbol-level dependency data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::package::PackagePath;

/// A confirmed use, inside `from`, of a declaration owned by `to`.
///
/// Equality and hashing cover the whole tuple, so a set of these holds at most
/// one entry per (from, to, declared_type) however often it was discovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolDependency {
    /// Package whose source text contains the reference
    pub from: PackagePath,
    /// Package that owns the referenced declaration
    pub to: PackagePath,
    /// Description of the declaration, e.g. `func example.com/b.New() *example.com/b.T`
    pub declared_type: String,
}

impl SymbolDependency {
    pub fn new(
        from: impl Into<PackagePath>,
        to: impl Into<PackagePath>,
        declared_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Declarations used by anyone, bucketed by owning package.
///
/// Every bucket becomes one cluster in the rendered graph; an empty bucket
/// still yields a cluster so edges can attach to it.
#[derive(Debug, Clone, Default)]
pub struct UsedSymbols {
    buckets: BTreeMap<PackagePath, Vec<String>>,
}

impl UsedSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a cluster exists for `package`, even without declarations
    pub fn ensure(&mut self, package: &str) {
        if !self.buckets.contains_key(package) {
            self.buckets.insert(package.to_string(), Vec::new());
        }
    }

    /// Record that `declared_type` of `package` is used; repeats are ignored
    pub fn push(&mut self, package: &str, declared_type: impl Into<String>) {
        let declared_type = declared_type.into();
        let bucket = self.buckets.entry(package.to_string()).or_default();
        if !bucket.contains(&declared_type) {
            bucket.push(declared_type);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackagePath, &Vec<String>)> {
        self.buckets.iter()
    }
}
