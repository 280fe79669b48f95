//! Data models and structures for symgraph

pub mod config;
pub mod dependency;
pub mod package;
pub mod semantic;

pub use config::{PartialSettings, Settings};
pub use dependency::{SymbolDependency, UsedSymbols};
pub use package::{package_ident, PackageEdgeMap, PackageGraph, PackageInfo, PackagePath, StdlibPolicy};
pub use semantic::{
    DefinitionFact, DescribeFact, PackageDescription, QueryOperation, SemanticFact,
    SemanticFailure, SemanticOutcome, SemanticQueryKey,
};
