//! Human-readable run summary

use ansi_term::Colour::{Blue, Cyan, Green, Yellow};
use ansi_term::Style;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;

use super::renderer::RenderStats;
use crate::core::CacheStats;

/// Everything reported once a graph has been produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub root: String,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
    pub packages: usize,
    pub render: RenderStats,
    pub cache: CacheStats,
    pub image: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

fn line(label: &str, value: String, use_colors: bool) -> String {
    if use_colors {
        format!("  {:<18} {}\n", Style::new().dimmed().paint(label), value)
    } else {
        format!("  {:<18} {}\n", label, value)
    }
}

/// Render the summary block printed to stderr
pub fn format_summary(summary: &RunSummary, use_colors: bool) -> String {
    let mut output = String::new();

    let title = format!("Dependency graph for {}", summary.root);
    if use_colors {
        output.push_str(&format!("{}\n", Blue.bold().paint(title)));
    } else {
        output.push_str(&format!("{}\n", title));
    }

    let paint = |value: usize, colour: ansi_term::Colour| {
        if use_colors {
            colour.paint(value.to_string()).to_string()
        } else {
            value.to_string()
        }
    };

    output.push_str(&line("Packages:", paint(summary.packages, Cyan), use_colors));
    output.push_str(&line(
        "Package edges:",
        format!(
            "{} ({} plotted)",
            paint(summary.render.package_edges, Cyan),
            summary.render.qualifying_edges
        ),
        use_colors,
    ));
    output.push_str(&line(
        "Symbol edges:",
        paint(summary.render.symbol_edges, Green),
        use_colors,
    ));
    output.push_str(&line(
        "Unused imports:",
        paint(summary.render.fallback_edges, Yellow),
        use_colors,
    ));
    output.push_str(&line("Clusters:", paint(summary.render.clusters, Cyan), use_colors));
    output.push_str(&line(
        "Semantic queries:",
        format!(
            "{} run, {} cached ({:.1}% hit rate)",
            summary.cache.executions,
            summary.cache.hits,
            summary.cache.hit_rate() * 100.0
        ),
        use_colors,
    ));

    if let Some(path) = &summary.output_file {
        output.push_str(&line("Graph written to:", path.display().to_string(), use_colors));
    }
    if let Some(path) = &summary.image {
        output.push_str(&line("Image:", path.display().to_string(), use_colors));
    }

    output.push_str(&line(
        "Finished:",
        format!(
            "{} in {:.2}s",
            summary.finished_at.format("%Y-%m-%d %H:%M:%S"),
            summary.elapsed.as_secs_f64()
        ),
        use_colors,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            root: "example.com/app".into(),
            finished_at: Local::now(),
            elapsed: Duration::from_millis(1500),
            packages: 5,
            render: RenderStats {
                package_edges: 7,
                qualifying_edges: 4,
                symbol_edges: 9,
                fallback_edges: 1,
                clusters: 4,
            },
            cache: CacheStats {
                executions: 30,
                hits: 10,
            },
            image: None,
            output_file: Some(PathBuf::from("graph.dot")),
        }
    }

    #[test]
    fn test_plain_summary() {
        let text = format_summary(&summary(), false);

        assert!(text.starts_with("Dependency graph for example.com/app\n"));
        assert!(text.contains("7 (4 plotted)"));
        assert!(text.contains("30 run, 10 cached (25.0% hit rate)"));
        assert!(text.contains("graph.dot"));
        assert!(text.contains("in 1.50s"));
        assert!(!text.contains("Image:"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_summary_has_escapes() {
        let text = format_summary(&summary(), true);
        assert!(text.contains('\u{1b}'));
    }
}
