//! Graph rendering and output functionality

pub mod colors;
pub mod dot;
pub mod labels;
pub mod layout;
mod progress;
pub mod renderer;
mod summary;
mod writers;

pub use self::colors::ColorTable;
pub use self::layout::LayoutRunner;
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::renderer::{GraphRenderer, RenderFilters, RenderStats, RenderedGraph};
pub use self::summary::{format_summary, RunSummary};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter, TeeWriter};
