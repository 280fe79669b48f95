//! Output writing functionality
//!
//! This module provides writers for the raw graph description.

use crate::error::{Result, SymgraphError};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| SymgraphError::StdoutWrite { source })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|source| SymgraphError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|source| SymgraphError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }
}

/// Writes the same content to every inner writer, stopping at the first failure
pub struct TeeWriter {
    writers: Vec<Box<dyn OutputWriter>>,
}

impl TeeWriter {
    pub fn new(writers: Vec<Box<dyn OutputWriter>>) -> Self {
        Self { writers }
    }
}

impl OutputWriter for TeeWriter {
    fn write(&self, content: &str) -> Result<()> {
        for writer in &self.writers {
            writer.write(content)?;
        }
        Ok(())
    }
}

/// Where the raw graph description goes.
///
/// The output file, when given, always receives a copy. Stdout receives it
/// only when the graph is not handed to the layout program.
pub fn create_writer(output_file: Option<&Path>, to_stdout: bool) -> Box<dyn OutputWriter> {
    let mut writers: Vec<Box<dyn OutputWriter>> = Vec::new();
    if let Some(path) = output_file {
        writers.push(Box::new(FileWriter::new(path)));
    }
    if to_stdout {
        writers.push(Box::new(StdoutWriter));
    }

    match writers.len() {
        1 => writers.remove(0),
        _ => Box::new(TeeWriter::new(writers)),
    }
}
