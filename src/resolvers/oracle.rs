//! Semantic queries through the `guru` / legacy `oracle` command line tools

use serde_json::Value;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};

use super::SemanticBackend;
use crate::models::config::OracleStyle;
use crate::models::{
    DefinitionFact, DescribeFact, QueryOperation, SemanticFact, SemanticFailure, SemanticOutcome,
    SemanticQueryKey,
};

/// One process spawn per query; memoization lives in `SemanticCache`
#[derive(Debug)]
pub struct OracleProcess {
    program: String,
    style: OracleStyle,
    launch_warned: AtomicBool,
}

impl OracleProcess {
    pub fn new(program: impl Into<String>, style: OracleStyle) -> Self {
        Self {
            program: program.into(),
            style,
            launch_warned: AtomicBool::new(false),
        }
    }

    /// Warn once per process about a backend that cannot be started.
    /// Returns true for the first failure only.
    fn note_launch_failure(&self, error: &std::io::Error) -> bool {
        if self.launch_warned.swap(true, Ordering::Relaxed) {
            return false;
        }
        tracing::warn!(
            program = %self.program,
            error = %error,
            "semantic backend could not be started; declaration edges will be missing"
        );
        true
    }

    /// Command line arguments for one query
    pub fn arguments(&self, key: &SemanticQueryKey) -> Vec<String> {
        let position = format!("{}:#{}", key.file.display(), key.offset);
        match self.style {
            OracleStyle::Guru => vec![
                "-json".to_string(),
                key.operation.as_str().to_string(),
                position,
            ],
            OracleStyle::Legacy => vec![
                "-format=json".to_string(),
                format!("-pos={}", position),
                key.operation.as_str().to_string(),
                key.package.clone(),
            ],
        }
    }

    /// Decode the backend's JSON for the given operation.
    ///
    /// guru prints the fact object directly; the legacy oracle wraps it as
    /// `{"mode": "<op>", "<op>": {...}}`.
    pub fn decode(operation: QueryOperation, stdout: &[u8]) -> SemanticOutcome {
        let value: Value =
            serde_json::from_slice(stdout).map_err(|e| SemanticFailure::Decode(e.to_string()))?;

        let body = match value.get("mode").and_then(Value::as_str) {
            Some(mode) => value
                .get(mode)
                .cloned()
                .ok_or(SemanticFailure::MissingFact(operation))?,
            None => value,
        };

        match operation {
            QueryOperation::Describe => serde_json::from_value::<DescribeFact>(body)
                .map(SemanticFact::Describe)
                .map_err(|e| SemanticFailure::Decode(e.to_string())),
            QueryOperation::Definition => serde_json::from_value::<DefinitionFact>(body)
                .map(SemanticFact::Definition)
                .map_err(|e| SemanticFailure::Decode(e.to_string())),
        }
    }
}

impl SemanticBackend for OracleProcess {
    fn query(&self, key: &SemanticQueryKey) -> SemanticOutcome {
        let args = self.arguments(key);
        tracing::debug!(
            program = %self.program,
            operation = %key.operation,
            offset = key.offset,
            file = %key.file.display(),
            package = %key.package,
            "semantic query"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                self.note_launch_failure(&e);
                SemanticFailure::Launch(format!("{}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(stderr = %stderr.trim(), "semantic query failed");
            return Err(SemanticFailure::from_stderr(&stderr));
        }

        Self::decode(key.operation, &output.stdout)
    }
}
