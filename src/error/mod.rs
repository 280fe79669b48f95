//! Error handling for symgraph
//!
//! This module provides the crate error type, result alias, severity levels
//! and context helpers.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, Result, SymgraphError};
