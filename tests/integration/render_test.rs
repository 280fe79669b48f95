use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use symgraph::core::{Crawler, DependencyAggregator, SemanticCache};
use symgraph::models::StdlibPolicy;
use symgraph::output::{ColorTable, GraphRenderer, RenderFilters};
use symgraph::resolvers::SemanticBackend;
use tempfile::{tempdir, TempDir};

use super::fakes::{package, FakeBackend, FakeResolver};

const ROOT_SOURCE: &str = r#"package main

import "example.com/r/a"

func main() {
	a.Run()
	a.Run()
}
"#;

const A_SOURCE: &str = r#"package a

import "example.com/r/b"

var _ = b.Version

func Run() {}
"#;

const B_SOURCE: &str = r#"package b

const Version = "1"
"#;

/// Root R imports A, A imports B; R calls A.Run twice and A only binds a
/// variable from B.
fn root_to_leaf_fixture() -> (TempDir, FakeResolver, FakeBackend) {
    let dir = tempdir().unwrap();
    let (root_dir, a_dir, b_dir) = (dir.path().join("r"), dir.path().join("a"), dir.path().join("b"));
    for (path, source) in [(&root_dir, ROOT_SOURCE), (&a_dir, A_SOURCE), (&b_dir, B_SOURCE)] {
        fs::create_dir_all(path).unwrap();
        fs::write(path.join("main.go"), source).unwrap();
    }

    let resolver = FakeResolver::default()
        .with(package("example.com/r", &root_dir, &["main.go"], &["example.com/r/a"], false))
        .with(package("example.com/r/a", &a_dir, &["main.go"], &["example.com/r/b"], false))
        .with(package("example.com/r/b", &b_dir, &["main.go"], &[], false));

    let root_file = root_dir.join("main.go");
    let first = ROOT_SOURCE.find("a.Run").unwrap();
    let second = ROOT_SOURCE.rfind("a.Run").unwrap();
    // The reference to b in package a resolves to a variable binding and is dropped.
    let a_file = a_dir.join("main.go");
    let b_ref = A_SOURCE.find("b.Version").unwrap();
    let backend = FakeBackend::default()
        .reference(&root_file, first, "a", "example.com/r/a", "func example.com/r/a.Run()")
        .reference(&root_file, second, "a", "example.com/r/a", "func example.com/r/a.Run()")
        .reference(&a_file, b_ref, "b", "example.com/r/b", "var example.com/r/b.Version");

    (dir, resolver, backend)
}

/// Edge lines of a graph description with their attribute lists removed
fn edge_set(dot: &str) -> BTreeSet<String> {
    dot.lines()
        .filter(|line| line.contains(" -> "))
        .map(|line| match line.find(" [") {
            Some(at) => line[..at].trim().to_string(),
            None => line.trim().trim_end_matches(';').to_string(),
        })
        .collect()
}

#[test]
fn test_root_to_leaf_render() {
    let (_dir, resolver, backend) = root_to_leaf_fixture();

    let graph = Crawler::new(&resolver, StdlibPolicy::Edge)
        .crawl("example.com/r")
        .unwrap();
    assert_eq!(graph.edge_count(), 2);

    let backend = Arc::new(backend);
    let cache = SemanticCache::new(backend.clone() as Arc<dyn SemanticBackend>);
    let aggregator = DependencyAggregator::new(&cache, 4).unwrap();
    let colors = ColorTable::new();
    let rendered = GraphRenderer::new(&aggregator, &colors, RenderFilters::default(), 2)
        .render(&graph)
        .unwrap();
    let dot = &rendered.dot;

    assert!(dot.starts_with("digraph \"example.com/r\" {"));
    assert!(dot.contains("graph [ranksep=\"2\"];"));

    // Two occurrences of the same declaration collapse into one edge
    assert_eq!(rendered.stats.symbol_edges, 1);
    assert_eq!(
        dot.matches("\"example.com/r\" -> \"example.com/r/a#func example.com/r/a.Run()\"")
            .count(),
        1
    );

    // a uses nothing from b, so exactly one dashed package edge is drawn
    assert_eq!(rendered.stats.fallback_edges, 1);
    assert_eq!(dot.matches("style=\"dashed\"").count(), 1);
    assert!(dot.contains("\"example.com/r/a\" -> \"example.com/r/b\" ["));
    assert!(dot.contains("lhead=\"cluster_example.com/r/b\""));

    // Root, a (declarations) and b (dashed target) each get a cluster
    assert_eq!(rendered.stats.clusters, 3);
    for package in ["example.com/r", "example.com/r/a", "example.com/r/b"] {
        assert!(dot.contains(&format!("subgraph \"cluster_{}\" {{", package)));
        assert!(dot.contains(&format!(
            "\"{}\" [weight=\"0\", shape=\"point\", style=\"invis\"];",
            package
        )));
    }
    assert!(dot.contains("[weight=\"1\", label=\"func Run()\"];"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_rendering_twice_yields_same_edges() {
    let (_dir, resolver, backend) = root_to_leaf_fixture();
    let graph = Crawler::new(&resolver, StdlibPolicy::Edge)
        .crawl("example.com/r")
        .unwrap();
    let backend: Arc<dyn SemanticBackend> = Arc::new(backend);

    let render = || {
        let cache = SemanticCache::new(backend.clone());
        let aggregator = DependencyAggregator::new(&cache, 4).unwrap();
        let colors = ColorTable::new();
        let dot = GraphRenderer::new(&aggregator, &colors, RenderFilters::default(), 2)
            .render(&graph)
            .unwrap()
            .dot;
        dot
    };

    let first = edge_set(&render());
    let second = edge_set(&render());

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert!(first.contains("\"example.com/r/a\" -> \"example.com/r/b\""));
}

#[test]
fn test_semantic_queries_are_memoized() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.go"), ROOT_SOURCE).unwrap();

    let info = package("example.com/r", dir.path(), &["main.go"], &["example.com/r/a"], false);
    let backend = Arc::new(FakeBackend::default());
    let cache = SemanticCache::new(backend.clone() as Arc<dyn SemanticBackend>);
    let aggregator = DependencyAggregator::new(&cache, 8).unwrap();

    let first = aggregator.find_symbol_dependencies(&info, "example.com/r/a").unwrap();
    let calls_after_first = *backend.calls.lock();
    let second = aggregator.find_symbol_dependencies(&info, "example.com/r/a").unwrap();

    assert!(first.is_empty());
    assert!(second.is_empty());
    assert!(calls_after_first > 0);
    assert_eq!(*backend.calls.lock(), calls_after_first);
    assert!(cache.stats().hits >= calls_after_first);
}

#[test]
fn test_missing_source_file_is_fatal() {
    let dir = tempdir().unwrap();
    let info = package("example.com/r", dir.path(), &["gone.go"], &["example.com/r/a"], false);
    let cache = SemanticCache::new(Arc::new(FakeBackend::default()));
    let aggregator = DependencyAggregator::new(&cache, 2).unwrap();

    assert!(aggregator
        .find_symbol_dependencies(&info, "example.com/r/a")
        .is_err());
}
