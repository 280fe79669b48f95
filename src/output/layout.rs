//! Hand-off to the external layout program and the platform image viewer

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{Result, ResultExt, SymgraphError};

/// Runs `<program> -T<format>` over a graph description
#[derive(Debug, Clone)]
pub struct LayoutRunner {
    program: String,
    format: String,
}

impl LayoutRunner {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Lay out `dot` and return the rendered image bytes
    pub fn render_image(&self, dot: &str) -> Result<Vec<u8>> {
        tracing::info!(program = %self.program, format = %self.format, "laying out graph");

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SymgraphError::tool_launch(&self.program, e))?;

        // Feed stdin from another thread so a full stdout pipe cannot stall us.
        let feeder = child.stdin.take().map(|mut stdin| {
            let input = dot.to_string();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| SymgraphError::tool_launch(&self.program, e))?;

        if let Some(feeder) = feeder {
            match feeder.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::debug!(error = %e, "layout program closed its input early"),
                Err(_) => tracing::debug!("layout input thread panicked"),
            }
        }

        if !output.status.success() {
            return Err(SymgraphError::Layout {
                program: self.program.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    /// Persist image bytes to a temporary file named after the root package
    pub fn write_image(&self, root: &str, image: &[u8]) -> Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}-", file_stem(root)))
            .suffix(&format!(".{}", self.format))
            .tempfile()
            .with_context(|| format!("Failed to create an image file for {}", root))?;

        file.write_all(image).map_err(|source| SymgraphError::OutputWrite {
            path: file.path().to_path_buf(),
            source,
        })?;

        let (_, path) = file.keep().map_err(|e| SymgraphError::io_error(e.error))?;
        Ok(path)
    }

    /// Lay out, save and open the graph; returns the image location
    pub fn show(&self, root: &str, dot: &str) -> Result<PathBuf> {
        let image = self.render_image(dot)?;
        let path = self.write_image(root, &image)?;
        open_viewer(&path)?;
        Ok(path)
    }
}

/// File-name-safe rendering of a package path
pub fn file_stem(root: &str) -> String {
    let stem: String = root
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "graph".to_string()
    } else {
        stem
    }
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Open an image with the platform's default viewer
pub fn open_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    let program = command.get_program().to_string_lossy().into_owned();
    tracing::debug!(program = %program, image = %path.display(), "opening viewer");

    let status = command
        .status()
        .map_err(|e| SymgraphError::tool_launch(&program, e))?;
    if !status.success() {
        return Err(SymgraphError::Layout {
            program,
            message: format!("viewer exited with {}", status),
        });
    }
    Ok(())
}
