//! Error types and definitions for symgraph
//!
//! Every failure that aborts a run is a [`SymgraphError`]. Per-occurrence
//! semantic failures are deliberately not part of this type; see
//! [`crate::models::semantic::SemanticFailure`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error level - current operation fails
    Error,
    /// Critical level - process should terminate before producing any graph
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for symgraph operations
#[derive(Debug, Error)]
pub enum SymgraphError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// JSON decoding errors for collaborator output
    #[error("JSON parsing error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A match or exclude expression that does not compile
    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Unknown standard library policy
    #[error("Unknown stdlib policy '{value}', expected 'yes', 'no' or 'edge'")]
    InvalidStdlibPolicy { value: String },

    /// The import resolver could not resolve a package
    #[error("Failed to resolve imports of {package}: {message}")]
    ImportResolution { package: String, message: String },

    /// An external program could not be started
    #[error("Failed to launch '{program}': {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A package source file could not be read
    #[error("Error reading source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bounded worker pool could not be created
    #[error("Worker pool error: {message}")]
    WorkerPool { message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// The layout program failed
    #[error("Layout program '{program}' failed: {message}")]
    Layout { program: String, message: String },

    /// Generic analysis failure with context
    #[error("Analysis error: {message}")]
    Analysis { message: String },
}

impl SymgraphError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical errors - nothing may be rendered
            SymgraphError::Config { .. } => ErrorSeverity::Critical,
            SymgraphError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            SymgraphError::ConfigRead { .. } => ErrorSeverity::Critical,
            SymgraphError::ConfigParse { .. } => ErrorSeverity::Critical,
            SymgraphError::InvalidPattern { .. } => ErrorSeverity::Critical,
            SymgraphError::InvalidStdlibPolicy { .. } => ErrorSeverity::Critical,
            SymgraphError::ImportResolution { .. } => ErrorSeverity::Critical,
            SymgraphError::ToolLaunch { .. } => ErrorSeverity::Critical,
            SymgraphError::StdoutWrite { .. } => ErrorSeverity::Critical,
            SymgraphError::OutputWrite { .. } => ErrorSeverity::Critical,

            // Regular errors
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            SymgraphError::ImportResolution { package, message } => {
                format!(
                    "Could not resolve package '{}': {}. No graph was produced; check the package path and your Go environment.",
                    package, message
                )
            }
            SymgraphError::InvalidStdlibPolicy { value } => {
                format!("Unknown stdlib value '{}'. Use 'yes', 'no' or 'edge'.", value)
            }
            SymgraphError::InvalidPattern { pattern, source } => {
                format!("'{}' is not a valid regular expression: {}", pattern, source)
            }
            SymgraphError::ToolLaunch { program, source } => {
                format!("Could not run '{}': {}. Make sure it is installed and on PATH.", program, source)
            }
            SymgraphError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file with --init or use command line options.",
                    path.display()
                )
            }
            SymgraphError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Suggested remedy shown after the message, if any
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SymgraphError::ImportResolution { .. } => {
                Some("Run `go list <package>` to see why the package cannot be loaded")
            }
            SymgraphError::ToolLaunch { .. } => {
                Some("Use --go, --oracle or --layout to point at a different executable")
            }
            SymgraphError::OutputWrite { .. } => {
                Some("Create the output directory first or specify a different path")
            }
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        SymgraphError::Io { source }
    }

    /// Create a JSON parse error with context
    pub fn json_parse_error(context: impl Into<String>, source: serde_json::Error) -> Self {
        SymgraphError::JsonParse {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        SymgraphError::Config {
            message: message.into(),
        }
    }

    /// Create a fatal import resolution error
    pub fn import_resolution(package: impl Into<String>, message: impl Into<String>) -> Self {
        SymgraphError::ImportResolution {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Create a launch error for an external program
    pub fn tool_launch(program: impl Into<String>, source: std::io::Error) -> Self {
        SymgraphError::ToolLaunch {
            program: program.into(),
            source,
        }
    }

    /// Create an analysis error
    pub fn analysis_error(message: impl Into<String>) -> Self {
        SymgraphError::Analysis {
            message: message.into(),
        }
    }
}

// Implement From for std I/O errors
impl From<std::io::Error> for SymgraphError {
    fn from(err: std::io::Error) -> Self {
        SymgraphError::io_error(err)
    }
}

/// Result type alias for symgraph operations
pub type Result<T> = std::result::Result<T, SymgraphError>;
