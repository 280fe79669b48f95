//! Semantic-analysis queries, facts and failure classes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::package::PackagePath;

/// The two questions the semantic backend is asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryOperation {
    /// Which declaration does the identifier at this offset denote, and who owns it
    Describe,
    /// What is the declaration starting at this offset
    Definition,
}

impl QueryOperation {
    /// Mode name understood by the semantic backend
    pub fn as_str(self) -> &'static str {
        match self {
            QueryOperation::Describe => "describe",
            QueryOperation::Definition => "definition",
        }
    }
}

impl fmt::Display for QueryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match memoization key for one semantic query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticQueryKey {
    /// Byte offset into `file`
    pub offset: usize,
    /// Absolute path of the source file
    pub file: PathBuf,
    /// Package enclosing `file`
    pub package: PackagePath,
    pub operation: QueryOperation,
}

impl SemanticQueryKey {
    pub fn new(
        offset: usize,
        file: impl Into<PathBuf>,
        package: impl Into<PackagePath>,
        operation: QueryOperation,
    ) -> Self {
        Self {
            offset,
            file: file.into(),
            package: package.into(),
            operation,
        }
    }
}

/// One member of a described package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMember {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub member_type: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub kind: String,
}

/// Package section of a describe answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescription {
    #[serde(default)]
    pub path: PackagePath,
    #[serde(default)]
    pub members: Vec<PackageMember>,
}

/// Answer to a describe query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeFact {
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub package: Option<PackageDescription>,
}

impl DescribeFact {
    /// Package owning the described declaration; empty when the backend did not say
    pub fn owning_package(&self) -> &str {
        self.package.as_ref().map(|p| p.path.as_str()).unwrap_or("")
    }
}

/// Answer to a definition query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionFact {
    #[serde(default)]
    pub objpos: String,
    #[serde(default)]
    pub desc: String,
}

impl DefinitionFact {
    /// The definition is a variable or parameter binding rather than a declaration
    /// reached through an import.
    pub fn is_variable_binding(&self) -> bool {
        self.desc.split_whitespace().next() == Some("var")
    }
}

/// A structured answer from the semantic backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticFact {
    Describe(DescribeFact),
    Definition(DefinitionFact),
}

/// Why a single semantic query produced no fact.
///
/// These are expected noise from the text scanner's over-approximation and are
/// discarded by the aggregator; they never abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticFailure {
    /// The offset lies in a comment or string, or the selection is ambiguous
    #[error("ambiguous selection at offset")]
    Ambiguous,

    /// There is no identifier at the offset, e.g. inside an import declaration
    #[error("no identifier at offset")]
    NoIdentifier,

    /// The backend could not be started
    #[error("failed to launch semantic backend: {0}")]
    Launch(String),

    /// The backend exited unsuccessfully
    #[error("semantic backend failed: {0}")]
    Exit(String),

    /// The backend's output could not be decoded
    #[error("undecodable semantic backend output: {0}")]
    Decode(String),

    /// The answer did not contain the requested section
    #[error("semantic backend answered without a {0} section")]
    MissingFact(QueryOperation),
}

impl SemanticFailure {
    /// Classify a failing backend run from its stderr text
    pub fn from_stderr(stderr: &str) -> Self {
        if stderr.contains("ambiguous selection") {
            SemanticFailure::Ambiguous
        } else if stderr.contains("no identifier here") {
            SemanticFailure::NoIdentifier
        } else {
            SemanticFailure::Exit(stderr.trim().to_string())
        }
    }
}

/// Memoized outcome of one query
pub type SemanticOutcome = Result<SemanticFact, SemanticFailure>;
