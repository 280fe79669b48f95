//! Clustered graph description of package and declaration dependencies

use regex::Regex;
use std::collections::HashSet;

use super::colors::ColorTable;
use super::dot::{cluster_id, DotBuilder};
use super::labels::display_label;
use crate::core::{DependencyAggregator, ProgressUpdate};
use crate::error::{OptionExt, Result, SymgraphError};
use crate::models::{PackageGraph, PackagePath, Settings, StdlibPolicy, UsedSymbols};

/// Cluster label for declarations whose owner the backend did not report
pub const UNKNOWN_PACKAGE: &str = "unknown package(s)";

/// Node id of a declaration inside its owning package's cluster
pub fn declaration_node_id(package: &str, declared_type: &str) -> String {
    format!("{}#{}", package, declared_type)
}

fn compile(pattern: &Option<String>) -> Result<Option<Regex>> {
    pattern
        .as_deref()
        .map(|p| {
            Regex::new(p).map_err(|source| SymgraphError::InvalidPattern {
                pattern: p.to_string(),
                source,
            })
        })
        .transpose()
}

/// Which package edges are plotted
#[derive(Debug, Clone, Default)]
pub struct RenderFilters {
    pub policy: StdlibPolicy,
    /// Importers must match; `None` admits everything
    pub match_pattern: Option<Regex>,
    /// Importers must not match; `None` excludes nothing
    pub exclude_pattern: Option<Regex>,
    pub include_external: bool,
    pub trim_structs: bool,
}

impl RenderFilters {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            policy: settings.stdlib,
            match_pattern: compile(&settings.match_pattern)?,
            exclude_pattern: compile(&settings.exclude_pattern)?,
            include_external: settings.include_external,
            trim_structs: settings.trim_structs,
        })
    }

    /// Whether edges out of `from` are plotted at all
    pub fn admits_importer(&self, graph: &PackageGraph, from: &str) -> bool {
        let standard = graph.is_standard(from);
        if standard && !self.policy.is_deep() {
            tracing::debug!(package = from, "standard importer not plotted");
            return false;
        }
        if !standard && !self.include_external && !from.starts_with(graph.root.as_str()) {
            tracing::warn!(package = from, root = %graph.root, "skipping external package");
            return false;
        }
        if let Some(pattern) = &self.match_pattern {
            if !pattern.is_match(from) {
                return false;
            }
        }
        if let Some(pattern) = &self.exclude_pattern {
            if pattern.is_match(from) {
                return false;
            }
        }
        true
    }

    /// Whether an edge into `to` is plotted once its importer is admitted
    pub fn admits_import(&self, graph: &PackageGraph, to: &str) -> bool {
        !(self.policy.skips_stdlib() && graph.is_standard(to))
    }

    /// Every plotted package edge, grouped by importer in path order
    pub fn qualifying_edges<'g>(
        &self,
        graph: &'g PackageGraph,
    ) -> Vec<(&'g PackagePath, &'g PackagePath)> {
        graph
            .edges
            .iter()
            .filter(|(from, _)| self.admits_importer(graph, from))
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from, to)))
            .filter(|(_, to)| self.admits_import(graph, to))
            .collect()
    }
}

/// Counts gathered while rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub package_edges: usize,
    pub qualifying_edges: usize,
    pub symbol_edges: usize,
    pub fallback_edges: usize,
    pub clusters: usize,
}

/// Output of one render
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub dot: String,
    pub stats: RenderStats,
}

type ProgressCallback<'a> = Box<dyn Fn(ProgressUpdate) + 'a>;

/// Turns a crawled package graph into a DOT description
pub struct GraphRenderer<'a> {
    aggregator: &'a DependencyAggregator<'a>,
    colors: &'a ColorTable,
    filters: RenderFilters,
    ranksep: u32,
    progress: Option<ProgressCallback<'a>>,
}

impl<'a> GraphRenderer<'a> {
    pub fn new(
        aggregator: &'a DependencyAggregator<'a>,
        colors: &'a ColorTable,
        filters: RenderFilters,
        ranksep: u32,
    ) -> Self {
        Self {
            aggregator,
            colors,
            filters,
            ranksep,
            progress: None,
        }
    }

    /// Report one update per processed package edge
    pub fn with_progress(mut self, callback: impl Fn(ProgressUpdate) + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn render(&self, graph: &PackageGraph) -> Result<RenderedGraph> {
        let root = graph.root.as_str();
        let edges = self.filters.qualifying_edges(graph);
        let mut stats = RenderStats {
            package_edges: graph.edge_count(),
            qualifying_edges: edges.len(),
            ..Default::default()
        };

        tracing::info!(
            package_edges = stats.package_edges,
            qualifying = stats.qualifying_edges,
            "rendering graph"
        );

        let mut dot = DotBuilder::new(root);
        dot.graph_attr("ranksep", &self.ranksep.to_string())
            .attr("compound", "true");

        let mut used = UsedSymbols::new();
        used.ensure(root);
        let mut seen = HashSet::new();
        let mut unused_imports = Vec::new();

        dot.blank().comment("dependencies on declarations");
        for (index, (from, to)) in edges.iter().enumerate() {
            let info = graph
                .package(from)
                .ok_or_error(|| SymgraphError::analysis_error(format!("{} was never resolved", from)))?;

            let mut dependencies: Vec<_> = self
                .aggregator
                .find_symbol_dependencies(info, to)?
                .into_iter()
                .collect();
            dependencies.sort();

            used.ensure(from);
            if dependencies.is_empty() {
                unused_imports.push((*from, *to));
            }

            for dependency in dependencies {
                if !seen.insert(dependency.clone()) {
                    continue;
                }
                let color = self.colors.color_for(&dependency.from);
                dot.edge_with_attrs(
                    &dependency.from,
                    &declaration_node_id(&dependency.to, &dependency.declared_type),
                    &[("color", color.as_str()), ("ltail", cluster_id(&dependency.from).as_str())],
                );
                used.push(&dependency.to, dependency.declared_type);
                stats.symbol_edges += 1;
            }

            if let Some(progress) = &self.progress {
                progress(ProgressUpdate::new(
                    index + 1,
                    edges.len(),
                    format!("{} -> {}", from, to),
                ));
            }
        }

        dot.blank().comment("imports without used declarations");
        for (from, to) in unused_imports {
            used.ensure(to);
            let color = self.colors.color_for(from);
            dot.edge_with_attrs(
                from,
                to,
                &[
                    ("color", color.as_str()),
                    ("ltail", cluster_id(from).as_str()),
                    ("lhead", cluster_id(to).as_str()),
                    ("style", "dashed"),
                ],
            );
            stats.fallback_edges += 1;
        }

        dot.blank().comment("packages");
        for (package, declarations) in used.iter() {
            let name = if package.is_empty() {
                UNKNOWN_PACKAGE
            } else {
                package.as_str()
            };
            dot.start_cluster(name, name)
                .attr("color", &self.colors.color_for(name))
                .node_full(name, &[("weight", "0"), ("shape", "point"), ("style", "invis")]);
            for declared in declarations {
                let label = display_label(declared, self.filters.trim_structs);
                dot.node_full(
                    &declaration_node_id(package, declared),
                    &[("weight", "1"), ("label", label.as_str())],
                );
            }
            dot.end_cluster();
            stats.clusters += 1;
        }

        Ok(RenderedGraph {
            dot: dot.build(),
            stats,
        })
    }
}
