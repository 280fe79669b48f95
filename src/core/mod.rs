//! Core analysis pipeline: crawl, scan, confirm, aggregate

pub mod aggregator;
pub mod crawler;
pub mod parallel;
pub mod scanner;
pub mod semantic;

pub use aggregator::DependencyAggregator;
pub use crawler::Crawler;
pub use parallel::ProgressUpdate;
pub use scanner::find_occurrences;
pub use semantic::{CacheStats, SemanticCache};
