//! Package-level import crawl

use std::collections::HashSet;

use crate::error::Result;
use crate::models::{PackageGraph, PackageInfo, StdlibPolicy};
use crate::resolvers::ImportResolver;

/// Depth-first crawl of the import graph starting at one root package
pub struct Crawler<'a> {
    resolver: &'a dyn ImportResolver,
    policy: StdlibPolicy,
}

impl<'a> Crawler<'a> {
    pub fn new(resolver: &'a dyn ImportResolver, policy: StdlibPolicy) -> Self {
        Self { resolver, policy }
    }

    /// Build the package edge map for `root`.
    ///
    /// Any resolution failure aborts the crawl; no partial graph is returned.
    pub fn crawl(&self, root: &str) -> Result<PackageGraph> {
        let mut graph = PackageGraph::new(root);
        let mut visited = HashSet::new();

        tracing::info!(root, policy = %self.policy, "crawling imports");
        self.visit(root, true, &mut graph, &mut visited)?;
        tracing::info!(
            packages = graph.packages.len(),
            edges = graph.edge_count(),
            "crawl finished"
        );

        Ok(graph)
    }

    fn visit(
        &self,
        path: &str,
        is_root: bool,
        graph: &mut PackageGraph,
        visited: &mut HashSet<String>,
    ) -> Result<()> {
        if !visited.insert(path.to_string()) {
            return Ok(());
        }

        let info = self.lookup(path, graph)?;
        if info.standard && !is_root && !self.policy.is_deep() {
            tracing::debug!(package = path, "not expanding standard package");
            return Ok(());
        }

        let mut recorded = Vec::with_capacity(info.imports.len());
        for import in &info.imports {
            if self.policy.skips_stdlib() && !info.standard {
                let target = self.lookup(import, graph)?;
                if target.standard {
                    tracing::debug!(from = path, to = %import, "skipping standard import");
                    continue;
                }
            }

            recorded.push(import.clone());
            self.visit(import, false, graph, visited)?;
        }

        graph.edges.insert(path.to_string(), recorded);
        Ok(())
    }

    /// Resolve a package once per crawl, remembering the answer in the graph
    fn lookup(&self, path: &str, graph: &mut PackageGraph) -> Result<PackageInfo> {
        if let Some(info) = graph.package(path) {
            return Ok(info.clone());
        }

        let info = self.resolver.resolve(path)?;
        graph.packages.insert(path.to_string(), info.clone());
        Ok(info)
    }
}
