//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OracleStyleArg};
use crate::error::Result;
use crate::models::config::{OracleStyle, PartialSettings};
use crate::models::StdlibPolicy;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub root: Option<String>,
    /// Unparsed so that a bad value surfaces as a configuration error
    pub stdlib: Option<String>,
    pub no_trim_structs: bool,
    pub include_external: bool,
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
    pub no_view: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_progress: bool,
    pub no_colors: bool,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            root: args.root.clone(),
            stdlib: args.stdlib.clone(),
            no_trim_structs: args.no_trim_structs,
            include_external: args.include_external,
            match_pattern: args.match_pattern.clone(),
            exclude_pattern: args.exclude_pattern.clone(),
            ranksep: args.ranksep,
            output_file: args.output_file.clone(),
            workers: args.workers,
            go_command: args.go_command.clone(),
            oracle_command: args.oracle_command.clone(),
            oracle_style: args.oracle_style.map(|style| match style {
                OracleStyleArg::Guru => OracleStyle::Guru,
                OracleStyleArg::Legacy => OracleStyle::Legacy,
            }),
            layout_program: args.layout_program.clone(),
            layout_format: args.layout_format.clone(),
            no_view: args.no_view,
            quiet: args.quiet,
            verbose: args.verbose,
            no_progress: args.no_progress,
            no_colors: args.no_colors,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings {
            root: args.root.clone(),
            match_pattern: args.match_pattern.clone(),
            exclude_pattern: args.exclude_pattern.clone(),
            ranksep: args.ranksep,
            output_file: args.output_file.clone(),
            workers: args.workers,
            go_command: args.go_command.clone(),
            oracle_command: args.oracle_command.clone(),
            oracle_style: args.oracle_style,
            layout_program: args.layout_program.clone(),
            layout_format: args.layout_format.clone(),
            ..Default::default()
        };

        if let Some(stdlib) = &args.stdlib {
            settings.stdlib = Some(stdlib.parse::<StdlibPolicy>()?);
        }

        // Boolean flags only ever override towards their non-default value
        if args.no_trim_structs {
            settings.trim_structs = Some(false);
        }
        if args.include_external {
            settings.include_external = Some(true);
        }
        if args.no_view {
            settings.view = Some(false);
        }
        if args.quiet {
            settings.quiet = Some(true);
        }
        if args.verbose {
            settings.verbose = Some(true);
        }
        if args.no_progress {
            settings.show_progress = Some(false);
        }
        if args.no_colors {
            settings.use_colors = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
