//! In-memory stand-ins for the go toolchain and the semantic backend

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use symgraph::error::{Result, SymgraphError};
use symgraph::models::{
    DefinitionFact, DescribeFact, PackageDescription, PackageInfo, QueryOperation, SemanticFact,
    SemanticFailure, SemanticOutcome, SemanticQueryKey,
};
use symgraph::resolvers::{ImportResolver, SemanticBackend};

/// Serves a fixed set of packages and records every lookup
#[derive(Default)]
pub struct FakeResolver {
    packages: HashMap<String, PackageInfo>,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub fn with(mut self, info: PackageInfo) -> Self {
        self.packages.insert(info.path.clone(), info);
        self
    }
}

impl ImportResolver for FakeResolver {
    fn resolve(&self, path: &str) -> Result<PackageInfo> {
        self.lookups.lock().push(path.to_string());
        self.packages
            .get(path)
            .cloned()
            .ok_or_else(|| SymgraphError::import_resolution(path, "cannot find package"))
    }
}

pub fn package(path: &str, dir: &Path, files: &[&str], imports: &[&str], standard: bool) -> PackageInfo {
    PackageInfo {
        path: path.to_string(),
        dir: dir.to_path_buf(),
        source_files: files.iter().map(|f| f.to_string()).collect(),
        imports: imports.iter().map(|i| i.to_string()).collect(),
        standard,
    }
}

/// Answers only the occurrences it was told about; everything else is noise
#[derive(Default)]
pub struct FakeBackend {
    answers: HashMap<(PathBuf, usize, QueryOperation), SemanticFact>,
    pub calls: Mutex<usize>,
}

impl FakeBackend {
    /// Register a confirmed `ident.Member` reference at `offset` in `file`
    pub fn reference(
        mut self,
        file: &Path,
        offset: usize,
        ident: &str,
        owner: &str,
        declared_type: &str,
    ) -> Self {
        self.answers.insert(
            (file.to_path_buf(), offset, QueryOperation::Describe),
            SemanticFact::Describe(DescribeFact {
                desc: "identifier".to_string(),
                package: Some(PackageDescription {
                    path: owner.to_string(),
                    members: Vec::new(),
                }),
                ..Default::default()
            }),
        );
        self.answers.insert(
            (file.to_path_buf(), offset + ident.len() + 1, QueryOperation::Definition),
            SemanticFact::Definition(DefinitionFact {
                objpos: format!("{}:1:1", owner),
                desc: declared_type.to_string(),
            }),
        );
        self
    }
}

impl SemanticBackend for FakeBackend {
    fn query(&self, key: &SemanticQueryKey) -> SemanticOutcome {
        *self.calls.lock() += 1;
        self.answers
            .get(&(key.file.clone(), key.offset, key.operation))
            .cloned()
            .ok_or(SemanticFailure::NoIdentifier)
    }
}
