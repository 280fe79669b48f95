//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// symgraph - package and declaration dependency grapher for Go code
#[derive(Parser, Debug, Clone)]
#[command(name = "symgraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Graph which declarations each Go package uses from the packages it imports")]
#[command(long_about = "symgraph crawls the imports of a root package with `go list`, then asks a \
semantic analysis tool (guru or the older oracle) which declarations of each imported package are \
actually used. The result is a clustered Graphviz graph: one cluster per package, one edge per used \
declaration, and a dashed edge for imports that use nothing.")]
#[command(after_help = "EXAMPLES:

    # Graph a package and open the rendered SVG
    symgraph github.com/acme/project

    # Print the DOT description instead of opening a viewer
    symgraph --no-view github.com/acme/project > project.dot

    # Expand the standard library as well
    symgraph --stdlib yes github.com/acme/project

    # Hide every standard library edge
    symgraph --stdlib no github.com/acme/project

    # Only plot importers under the storage subtree, skipping tests helpers
    symgraph --match '/storage' --exclude 'testutil' github.com/acme/project

    # Use the legacy oracle tool
    symgraph --oracle oracle --oracle-style legacy github.com/acme/project

    # Create a default configuration file
    symgraph --init
")]
pub struct Args {
    /// Root package path
    #[arg(value_name = "PACKAGE", help = "Import path of the package to graph; falls back to `root` in the config file")]
    pub root: Option<String>,

    /// Standard library policy
    #[arg(long, value_name = "yes|no|edge", help = "Standard library handling: 'yes' expands it, 'edge' plots edges into it without expanding, 'no' hides it [default: edge]")]
    pub stdlib: Option<String>,

    /// Keep struct field lists in labels
    #[arg(long, help = "Show full struct field lists in declaration labels instead of struct{...}")]
    pub no_trim_structs: bool,

    /// Plot packages outside the root's path
    #[arg(long, help = "Also plot declarations used by packages outside the root package's import path")]
    pub include_external: bool,

    /// Importer filter
    #[arg(long = "match", value_name = "REGEX", help = "Only plot edges whose importing package matches this regular expression")]
    pub match_pattern: Option<String>,

    /// Importer exclusion
    #[arg(long = "exclude", value_name = "REGEX", help = "Never plot edges whose importing package matches this regular expression")]
    pub exclude_pattern: Option<String>,

    /// Layout rank separation
    #[arg(long, value_name = "N", help = "Rank separation passed to the layout program [default: 2]")]
    pub ranksep: Option<u32>,

    /// Copy of the graph description
    #[arg(short, long = "output", value_name = "FILE", help = "Also write the raw DOT description to this file")]
    pub output_file: Option<PathBuf>,

    /// Concurrent semantic queries
    #[arg(long, value_name = "N", help = "Maximum number of concurrent semantic queries [default: 64]")]
    pub workers: Option<usize>,

    /// Go toolchain executable
    #[arg(long = "go", value_name = "CMD", help = "Executable used for `go list` [default: go]")]
    pub go_command: Option<String>,

    /// Semantic backend executable
    #[arg(long = "oracle", value_name = "CMD", help = "Semantic analysis executable [default: guru]")]
    pub oracle_command: Option<String>,

    /// Semantic backend dialect
    #[arg(long, value_enum, value_name = "STYLE", help = "Command-line dialect of the semantic analysis executable")]
    pub oracle_style: Option<OracleStyleArg>,

    /// Layout program
    #[arg(long = "layout", value_name = "PROGRAM", help = "Graphviz layout program [default: dot]")]
    pub layout_program: Option<String>,

    /// Image format
    #[arg(long = "format", value_name = "FMT", help = "Image format requested from the layout program [default: svg]")]
    pub layout_format: Option<String>,

    /// Skip layout and viewer
    #[arg(long, help = "Print the DOT description to stdout instead of rendering and opening it")]
    pub no_view: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .symgraph.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress progress bars and the run summary")]
    pub quiet: bool,

    /// Debug logging
    #[arg(short, long, help = "Log every external invocation and rejected reference to stderr")]
    pub verbose: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars")]
    pub no_progress: bool,

    /// Disable colors
    #[arg(long, help = "Disable colored summary output")]
    pub no_colors: bool,

    /// Create a default configuration file
    #[arg(long, help = "Write a commented .symgraph.toml to the current directory and exit")]
    pub init: bool,
}

/// Semantic backend dialects selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleStyleArg {
    /// guru -json <mode> <file>:#<offset>
    Guru,
    /// oracle -format=json -pos=<file>:#<offset> <mode> <package>
    Legacy,
}
