//! Source file and manifest parsing
//!
//! Dataset sources are plain text, one entry per line. A collection
//! manifest lists datasets as `<name>: <sourceFileStem>` lines, where the
//! stem names the source file (without extension) under the data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One parsed manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLine {
    /// Dataset name
    pub name: String,
    /// Source file stem, resolved under the data directory
    pub stem: String,
}

/// Read a newline-delimited source file into lines
///
/// Line terminators are stripped; nothing else is touched, so the line's
/// exact text becomes the entry.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Resolve a source stem to its `.txt` file under the data directory
#[must_use]
pub fn source_path(data_dir: &Path, stem: &str) -> PathBuf {
    data_dir.join(format!("{stem}.txt"))
}

/// Parse manifest text into dataset lines
///
/// Blank lines and lines without a colon separator are skipped.
///
/// # Examples
/// ```
/// use lettercross::loader::parse_manifest;
///
/// let lines = parse_manifest("elements: periodic_table\n");
/// assert_eq!(lines[0].name, "elements");
/// assert_eq!(lines[0].stem, "periodic_table");
/// ```
#[must_use]
pub fn parse_manifest(text: &str) -> Vec<ManifestLine> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            let (name, stem) = line.split_once(':')?;
            let name = name.trim();
            let stem = stem.trim();
            if name.is_empty() || stem.is_empty() {
                return None;
            }
            Some(ManifestLine {
                name: name.to_string(),
                stem: stem.to_string(),
            })
        })
        .collect()
}
