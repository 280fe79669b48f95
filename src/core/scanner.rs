//! Textual reference scanner
//!
//! Cheap first stage of dependency discovery: every byte position where the
//! candidate identifier appears. Word boundaries are not checked; comments,
//! strings and longer identifiers all produce hits that the semantic stage
//! later rejects.

use std::path::Path;

use crate::error::{Result, ResultExt};

/// Every starting offset of `ident` in `text`, in increasing order.
///
/// Scanning resumes one byte after each hit, so adjacent and overlapping
/// repeats are all reported. Empty input on either side yields no offsets.
pub fn find_occurrences(text: &[u8], ident: &[u8]) -> Vec<usize> {
    if ident.is_empty() || text.len() < ident.len() {
        return Vec::new();
    }

    text.windows(ident.len())
        .enumerate()
        .filter(|(_, window)| *window == ident)
        .map(|(offset, _)| offset)
        .collect()
}

/// Read a source file and scan it for `ident`
pub fn scan_file(path: &Path, ident: &str) -> Result<Vec<usize>> {
    let text = std::fs::read(path).with_file_context(path)?;
    Ok(find_occurrences(&text, ident.as_bytes()))
}
