//! Command implementations

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;

use super::Args;
use crate::config::{load_config, CliArgs, FileConfig};
use crate::core::{Crawler, DependencyAggregator, SemanticCache};
use crate::error::{ErrorSeverity, Result};
use crate::models::Settings;
use crate::output::{
    create_progress_callback, create_writer, format_summary, ColorTable, GraphRenderer,
    LayoutRunner, ProgressReporter, RenderFilters, RunSummary,
};
use crate::resolvers::{GoListResolver, OracleProcess, SemanticBackend};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Graph the dependencies of a root package
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                let settings = load_config(CliArgs::from(args))?;
                analyze(&settings)
            }
            Command::Init => init(),
        }
    }

    /// Run the command and map failures to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }

                match err.severity() {
                    ErrorSeverity::Error => 1,
                    ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}

fn init() -> Result<()> {
    let file_config = FileConfig::new();
    let path = file_config.path();

    if path.exists() {
        eprintln!("Configuration file already exists at: {}", path.display());
        eprintln!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    file_config.create_default()?;
    eprintln!("Created default configuration file at: {}", path.display());
    Ok(())
}

/// Crawl, query, render, then hand the graph to its destinations
fn analyze(settings: &Settings) -> Result<()> {
    let start_time = Instant::now();
    let reporter = Arc::new(ProgressReporter::new(
        settings.quiet || !settings.show_progress,
    ));

    tracing::info!(root = %settings.root, stdlib = %settings.stdlib, "starting crawl");

    let resolver = GoListResolver::new(settings.go_command.as_str());
    let spinner = reporter.create_spinner(&format!("Resolving imports of {}", settings.root));
    let graph = Crawler::new(&resolver, settings.stdlib).crawl(&settings.root)?;
    if let Some(spinner) = spinner {
        spinner.finish_with_message(format!("Resolved {} packages", graph.packages.len()));
    }

    let backend: Arc<dyn SemanticBackend> = Arc::new(OracleProcess::new(
        settings.oracle_command.as_str(),
        settings.oracle_style,
    ));
    let cache = SemanticCache::new(backend);
    let aggregator = DependencyAggregator::new(&cache, settings.workers)?;
    let colors = ColorTable::new();
    let filters = RenderFilters::from_settings(settings)?;

    reporter.start(0, "Querying used declarations");
    let rendered = GraphRenderer::new(&aggregator, &colors, filters, settings.ranksep)
        .with_progress(create_progress_callback(reporter.clone()))
        .render(&graph)?;
    reporter.finish(&format!(
        "Plotted {} declaration edges",
        rendered.stats.symbol_edges
    ));

    let output_file = settings.output_file.as_deref();
    create_writer(output_file, !settings.view).write(&rendered.dot)?;

    let image = if settings.view {
        let layout = LayoutRunner::new(settings.layout_program.as_str(), settings.layout_format.as_str());
        Some(layout.show(&settings.root, &rendered.dot)?)
    } else {
        None
    };

    if !settings.quiet {
        let summary = RunSummary {
            root: settings.root.clone(),
            finished_at: Local::now(),
            elapsed: start_time.elapsed(),
            packages: graph.packages.len(),
            render: rendered.stats,
            cache: cache.stats(),
            image,
            output_file: output_file.map(Path::to_path_buf),
        };
        eprint!("{}", format_summary(&summary, settings.use_colors));
    }

    Ok(())
}
