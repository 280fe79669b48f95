//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::package::StdlibPolicy;

/// Default number of concurrent semantic queries per package edge
pub const DEFAULT_WORKERS: usize = 64;

/// Main configuration settings for symgraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Package the crawl starts from
    pub root: String,

    /// Standard library traversal policy
    pub stdlib: StdlibPolicy,

    /// Collapse struct field lists in labels to `struct{...}`
    pub trim_structs: bool,

    /// Plot packages outside the root's path prefix as importers too
    pub include_external: bool,

    /// Only importers matching this expression are plotted
    pub match_pattern: Option<String>,

    /// Importers matching this expression are never plotted
    pub exclude_pattern: Option<String>,

    /// Rank separation passed to the layout program
    pub ranksep: u32,

    /// Raw graph description is also written here
    pub output_file: Option<PathBuf>,

    /// Bound on concurrent semantic queries
    pub workers: usize,

    /// Executable used to resolve package imports
    pub go_command: String,

    /// Executable answering semantic queries
    pub oracle_command: String,

    /// Command-line dialect of the semantic backend
    pub oracle_style: OracleStyle,

    /// Graph layout program
    pub layout_program: String,

    /// Image format requested from the layout program
    pub layout_format: String,

    /// Lay out the graph and open the image in a viewer
    pub view: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug logging
    pub verbose: bool,

    /// Whether to show progress bars
    pub show_progress: bool,

    /// Whether to use colors in the summary
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: String::new(),
            stdlib: StdlibPolicy::Edge,
            trim_structs: true,
            include_external: false,
            match_pattern: None,
            exclude_pattern: None,
            ranksep: 2,
            output_file: None,
            workers: DEFAULT_WORKERS,
            go_command: "go".to_string(),
            oracle_command: "guru".to_string(),
            oracle_style: OracleStyle::Guru,
            layout_program: "dot".to_string(),
            layout_format: "svg".to_string(),
            view: true,
            quiet: false,
            verbose: false,
            show_progress: true,
            use_colors: true,
        }
    }
}

/// Command-line dialect spoken by the semantic backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleStyle {
    /// `guru -json <mode> <file>:#<offset>`
    Guru,
    /// `oracle -format=json -pos=<file>:#<offset> <mode> <package>`
    Legacy,
}

impl std::str::FromStr for OracleStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guru" => Ok(OracleStyle::Guru),
            "legacy" | "oracle" => Ok(OracleStyle::Legacy),
            _ => Err(format!("Invalid oracle style: {}", s)),
        }
    }
}

impl std::fmt::Display for OracleStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleStyle::Guru => write!(f, "guru"),
            OracleStyle::Legacy => write!(f, "legacy"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub root: Option<String>,
    pub stdlib: Option<StdlibPolicy>,
    pub trim_structs: Option<bool>,
    pub include_external: Option<bool>,
    pub match_pattern: Option<String>,
    pub exclude_pattern: Option<String>,
    pub ranksep: Option<u32>,
    pub output_file: Option<PathBuf>,
    pub workers: Option<usize>,
    pub go_command: Option<String>,
    pub oracle_command: Option<String>,
    pub oracle_style: Option<OracleStyle>,
    pub layout_program: Option<String>,
    pub layout_format: Option<String>,
    pub view: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub show_progress: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root.is_some() {
            self.root = other.root;
        }
        if other.stdlib.is_some() {
            self.stdlib = other.stdlib;
        }
        if other.trim_structs.is_some() {
            self.trim_structs = other.trim_structs;
        }
        if other.include_external.is_some() {
            self.include_external = other.include_external;
        }
        if other.match_pattern.is_some() {
            self.match_pattern = other.match_pattern;
        }
        if other.exclude_pattern.is_some() {
            self.exclude_pattern = other.exclude_pattern;
        }
        if other.ranksep.is_some() {
            self.ranksep = other.ranksep;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.workers.is_some() {
            self.workers = other.workers;
        }
        if other.go_command.is_some() {
            self.go_command = other.go_command;
        }
        if other.oracle_command.is_some() {
            self.oracle_command = other.oracle_command;
        }
        if other.oracle_style.is_some() {
            self.oracle_style = other.oracle_style;
        }
        if other.layout_program.is_some() {
            self.layout_program = other.layout_program;
        }
        if other.layout_format.is_some() {
            self.layout_format = other.layout_format;
        }
        if other.view.is_some() {
            self.view = other.view;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root) = &self.root {
            settings.root = root.clone();
        }
        if let Some(stdlib) = self.stdlib {
            settings.stdlib = stdlib;
        }
        if let Some(trim_structs) = self.trim_structs {
            settings.trim_structs = trim_structs;
        }
        if let Some(include_external) = self.include_external {
            settings.include_external = include_external;
        }
        if let Some(pattern) = &self.match_pattern {
            settings.match_pattern = Some(pattern.clone());
        }
        if let Some(pattern) = &self.exclude_pattern {
            settings.exclude_pattern = Some(pattern.clone());
        }
        if let Some(ranksep) = self.ranksep {
            settings.ranksep = ranksep;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(workers) = self.workers {
            settings.workers = workers;
        }
        if let Some(go_command) = &self.go_command {
            settings.go_command = go_command.clone();
        }
        if let Some(oracle_command) = &self.oracle_command {
            settings.oracle_command = oracle_command.clone();
        }
        if let Some(oracle_style) = self.oracle_style {
            settings.oracle_style = oracle_style;
        }
        if let Some(layout_program) = &self.layout_program {
            settings.layout_program = layout_program.clone();
        }
        if let Some(layout_format) = &self.layout_format {
            settings.layout_format = layout_format.clone();
        }
        if let Some(view) = self.view {
            settings.view = view;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
