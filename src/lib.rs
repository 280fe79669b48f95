//! symgraph - package and declaration dependency grapher for Go code
//!
//! Crawls the import graph of a root package, asks a semantic analysis
//! tool which declarations each import actually uses, and renders the
//! result as a clustered Graphviz description.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod resolvers;

// Re-export commonly used types
pub use error::{ErrorSeverity, OptionExt, Result, ResultExt, SymgraphError};
pub use models::{
    config::Settings,
    package::{PackageGraph, PackageInfo, StdlibPolicy},
    SymbolDependency,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
