//! Import resolution through `go list -json`

use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;

use super::ImportResolver;
use crate::error::{Result, SymgraphError};
use crate::models::PackageInfo;

/// Subset of the `go list -json` package record we rely on
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListPackage {
    import_path: String,
    #[serde(default)]
    dir: PathBuf,
    #[serde(default)]
    go_files: Vec<String>,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    standard: bool,
    #[serde(default)]
    goroot: bool,
    #[serde(default)]
    error: Option<GoListError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListError {
    #[serde(default)]
    err: String,
}

/// Resolves packages by shelling out to the Go toolchain
#[derive(Debug, Clone)]
pub struct GoListResolver {
    program: String,
}

impl GoListResolver {
    /// Create a resolver invoking `program` (usually `go`)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn decode(path: &str, stdout: &[u8]) -> Result<PackageInfo> {
        let record: GoListPackage = serde_json::from_slice(stdout)
            .map_err(|e| SymgraphError::json_parse_error(format!("go list {}", path), e))?;

        if let Some(error) = record.error {
            return Err(SymgraphError::import_resolution(path, error.err));
        }

        Ok(PackageInfo {
            path: record.import_path,
            dir: record.dir,
            source_files: record.go_files,
            imports: record.imports,
            standard: record.standard || record.goroot,
        })
    }
}

impl ImportResolver for GoListResolver {
    fn resolve(&self, path: &str) -> Result<PackageInfo> {
        let mut command = Command::new(&self.program);
        command.args(["list", "-json", "--", path]);

        tracing::debug!(program = %self.program, package = path, "resolving imports");

        let output = command
            .output()
            .map_err(|e| SymgraphError::tool_launch(&self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SymgraphError::import_resolution(path, stderr.trim()));
        }

        Self::decode(path, &output.stdout)
    }
}
