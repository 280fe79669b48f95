//! Symbol dependency aggregation for one package edge
//!
//! Scans the importer's sources for the imported package's identifier and
//! confirms every hit with two semantic queries on a bounded worker pool.

use parking_lot::Mutex;
use rayon::ThreadPool;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::parallel::query_pool;
use super::scanner::scan_file;
use super::semantic::SemanticCache;
use crate::error::Result;
use crate::models::{
    package_ident, PackageInfo, QueryOperation, SemanticFact, SemanticQueryKey, SymbolDependency,
};

/// Fans semantic confirmation of scanner hits out over a fixed-size pool
pub struct DependencyAggregator<'a> {
    cache: &'a SemanticCache,
    pool: ThreadPool,
}

impl<'a> DependencyAggregator<'a> {
    /// Create an aggregator running at most `workers` queries at once
    pub fn new(cache: &'a SemanticCache, workers: usize) -> Result<Self> {
        Ok(Self {
            cache,
            pool: query_pool(workers)?,
        })
    }

    /// Every declaration of `to` that `from`'s sources use.
    ///
    /// Source read failures are fatal; failed or rejected queries only drop
    /// the occurrence they belong to.
    pub fn find_symbol_dependencies(
        &self,
        from: &PackageInfo,
        to: &str,
    ) -> Result<HashSet<SymbolDependency>> {
        let ident = package_ident(to);

        let mut candidates: Vec<(PathBuf, usize)> = Vec::new();
        for file in from.source_paths() {
            for offset in scan_file(&file, ident)? {
                candidates.push((file.clone(), offset));
            }
        }

        tracing::debug!(
            from = %from.path,
            to,
            candidates = candidates.len(),
            "confirming candidate references"
        );

        let found = Mutex::new(HashSet::new());
        self.pool.scope(|scope| {
            for (file, offset) in &candidates {
                let found = &found;
                scope.spawn(move |_| {
                    if let Some(dependency) = self.confirm(&from.path, file, *offset, ident) {
                        found.lock().insert(dependency);
                    }
                });
            }
        });

        Ok(found.into_inner())
    }

    /// Run the describe/definition pair for one occurrence
    fn confirm(
        &self,
        from: &str,
        file: &Path,
        offset: usize,
        ident: &str,
    ) -> Option<SymbolDependency> {
        let describe = match self.cache.resolve(SemanticQueryKey::new(
            offset,
            file,
            from,
            QueryOperation::Describe,
        )) {
            Ok(SemanticFact::Describe(fact)) => fact,
            Ok(_) => return None,
            Err(failure) => {
                tracing::debug!(file = %file.display(), offset, %failure, "describe rejected");
                return None;
            }
        };

        // Skip the identifier and the selector dot that follows it.
        let member_offset = offset + ident.len() + 1;
        let definition = match self.cache.resolve(SemanticQueryKey::new(
            member_offset,
            file,
            from,
            QueryOperation::Definition,
        )) {
            Ok(SemanticFact::Definition(fact)) => fact,
            Ok(_) => return None,
            Err(failure) => {
                tracing::debug!(
                    file = %file.display(),
                    offset = member_offset,
                    %failure,
                    "definition rejected"
                );
                return None;
            }
        };

        if definition.is_variable_binding() {
            tracing::debug!(file = %file.display(), offset, desc = %definition.desc, "variable binding");
            return None;
        }

        Some(SymbolDependency::new(
            from,
            describe.owning_package(),
            definition.desc,
        ))
    }
}
