use std::path::Path;
use symgraph::core::Crawler;
use symgraph::error::SymgraphError;
use symgraph::models::StdlibPolicy;

use super::fakes::{package, FakeResolver};

/// app -> {app/db, fmt}; app/db -> {app/model, database/sql}; app/model -> app/db;
/// fmt -> io; database/sql -> context
fn resolver() -> FakeResolver {
    let dir = Path::new("/nonexistent");
    FakeResolver::default()
        .with(package("example.com/app", dir, &[], &["example.com/app/db", "fmt"], false))
        .with(package(
            "example.com/app/db",
            dir,
            &[],
            &["example.com/app/model", "database/sql"],
            false,
        ))
        .with(package("example.com/app/model", dir, &[], &["example.com/app/db"], false))
        .with(package("fmt", dir, &[], &["io"], true))
        .with(package("io", dir, &[], &[], true))
        .with(package("database/sql", dir, &[], &["context"], true))
        .with(package("context", dir, &[], &[], true))
}

#[test]
fn test_edge_policy_records_but_does_not_expand_stdlib() {
    let resolver = resolver();
    let graph = Crawler::new(&resolver, StdlibPolicy::Edge)
        .crawl("example.com/app")
        .unwrap();

    assert_eq!(
        graph.edges["example.com/app"],
        vec!["example.com/app/db".to_string(), "fmt".to_string()]
    );
    assert!(graph.edges.contains_key("example.com/app/model"));
    assert!(!graph.edges.contains_key("fmt"));
    assert!(!graph.edges.contains_key("database/sql"));
    assert!(!resolver.lookups.lock().contains(&"io".to_string()));
}

#[test]
fn test_cycles_resolve_each_package_once() {
    let resolver = resolver();
    Crawler::new(&resolver, StdlibPolicy::Edge)
        .crawl("example.com/app")
        .unwrap();

    let lookups = resolver.lookups.lock();
    let db_lookups = lookups.iter().filter(|p| *p == "example.com/app/db").count();
    assert_eq!(db_lookups, 1);
}

#[test]
fn test_deep_policy_expands_stdlib() {
    let resolver = resolver();
    let graph = Crawler::new(&resolver, StdlibPolicy::Deep)
        .crawl("example.com/app")
        .unwrap();

    assert_eq!(graph.edges["fmt"], vec!["io".to_string()]);
    assert_eq!(graph.edges["database/sql"], vec!["context".to_string()]);
    assert_eq!(graph.packages.len(), 7);
}

#[test]
fn test_none_policy_drops_stdlib_edges() {
    let resolver = resolver();
    let graph = Crawler::new(&resolver, StdlibPolicy::None)
        .crawl("example.com/app")
        .unwrap();

    assert_eq!(
        graph.edges["example.com/app"],
        vec!["example.com/app/db".to_string()]
    );
    assert_eq!(
        graph.edges["example.com/app/db"],
        vec!["example.com/app/model".to_string()]
    );
    assert!(graph.package_edges().all(|(_, to)| !graph.is_standard(to)));
}

#[test]
fn test_standard_root_is_expanded() {
    let resolver = resolver();
    let graph = Crawler::new(&resolver, StdlibPolicy::Edge).crawl("fmt").unwrap();

    assert_eq!(graph.edges["fmt"], vec!["io".to_string()]);
    assert!(!graph.edges.contains_key("io"));
}

#[test]
fn test_unresolvable_import_aborts() {
    let dir = Path::new("/nonexistent");
    let resolver = FakeResolver::default().with(package(
        "example.com/app",
        dir,
        &[],
        &["example.com/missing"],
        false,
    ));

    let result = Crawler::new(&resolver, StdlibPolicy::Edge).crawl("example.com/app");
    assert!(matches!(
        result,
        Err(SymgraphError::ImportResolution { ref package, .. }) if package == "example.com/missing"
    ));
}
