//! Command-line interface components

pub mod args;
pub mod commands;

pub use args::{Args, OracleStyleArg};
pub use commands::Command;
