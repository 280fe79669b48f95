//! Package-level data structures

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::SymgraphError;

/// Hierarchical import path of a source package, e.g. `github.com/acme/odb/oauth`
pub type PackagePath = String;

/// Package path → direct imports, in resolver order
pub type PackageEdgeMap = BTreeMap<PackagePath, Vec<PackagePath>>;

/// Local identifier a package is referred to by: the final path segment.
pub fn package_ident(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// How far the crawler and renderer follow standard library packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StdlibPolicy {
    /// Never record edges from user code into the standard library
    #[serde(rename = "no")]
    None,
    /// Record edges into the standard library but do not expand them
    #[default]
    #[serde(rename = "edge")]
    Edge,
    /// Expand the standard library like any other package
    #[serde(rename = "yes")]
    Deep,
}

impl StdlibPolicy {
    /// Whether standard packages are expanded and plotted as importers
    pub fn is_deep(self) -> bool {
        self == StdlibPolicy::Deep
    }

    /// Whether edges into standard packages are dropped entirely
    pub fn skips_stdlib(self) -> bool {
        self == StdlibPolicy::None
    }
}

impl FromStr for StdlibPolicy {
    type Err = SymgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(StdlibPolicy::Deep),
            "edge" => Ok(StdlibPolicy::Edge),
            "no" => Ok(StdlibPolicy::None),
            _ => Err(SymgraphError::InvalidStdlibPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StdlibPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StdlibPolicy::Deep => write!(f, "yes"),
            StdlibPolicy::Edge => write!(f, "edge"),
            StdlibPolicy::None => write!(f, "no"),
        }
    }
}

/// What the import resolver knows about one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Import path
    pub path: PackagePath,
    /// Directory holding the package sources
    pub dir: PathBuf,
    /// Source file names, relative to `dir`
    pub source_files: Vec<String>,
    /// Direct imports
    pub imports: Vec<PackagePath>,
    /// Part of the platform's base distribution
    pub standard: bool,
}

impl PackageInfo {
    /// Absolute paths of every source file in the package
    pub fn source_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.source_files.iter().map(move |name| self.dir.join(name))
    }
}

/// Output of one crawl: the package edge map plus everything resolved on the way
#[derive(Debug, Clone, Default)]
pub struct PackageGraph {
    /// Package the crawl started from
    pub root: PackagePath,
    /// Recorded package-level import edges
    pub edges: PackageEdgeMap,
    /// Resolver answers, one per resolved package
    pub packages: HashMap<PackagePath, PackageInfo>,
}

impl PackageGraph {
    pub fn new(root: impl Into<PackagePath>) -> Self {
        Self {
            root: root.into(),
            edges: PackageEdgeMap::new(),
            packages: HashMap::new(),
        }
    }

    /// Resolver answer for a package, if it was resolved during the crawl
    pub fn package(&self, path: &str) -> Option<&PackageInfo> {
        self.packages.get(path)
    }

    /// Whether a package belongs to the standard library.
    ///
    /// Packages that were never resolved are treated as non-standard.
    pub fn is_standard(&self, path: &str) -> bool {
        self.packages.get(path).map(|p| p.standard).unwrap_or(false)
    }

    /// Iterate over every recorded (from, to) package edge
    pub fn package_edges(&self) -> impl Iterator<Item = (&PackagePath, &PackagePath)> {
        self.edges
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from, to)))
    }

    /// Total number of recorded package edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
