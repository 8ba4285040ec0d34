//! File processing API
//!
//! The CLI sits on this module: read a documentation file, run discovery
//! over its code blocks, and produce either a cleaned rendition of the file
//! or a report of the transcript blocks found. Markdown files are handled
//! block-by-block; anything else is treated as one raw transcript.

use crate::transcript::markdown::{page_from_markdown, rewrite_markdown};
use crate::transcript::registry::BlockRegistry;
use crate::transcript::strip::strip;
use crate::transcript::surface::RenderSurface;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for the blocks report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format string like "text" or "json".
    pub fn from_string(format_str: &str) -> Result<Self, ProcessError> {
        match format_str {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessError::InvalidFormat(other.to_string())),
        }
    }
}

/// Errors that can occur during file processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    FileNotFound(String),
    InvalidFormat(String),
    IoError(String),
}

impl std::error::Error for ProcessError {}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// One row of the blocks report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    pub id: String,
    pub language: Option<String>,
    pub lines: usize,
    pub clean_lines: usize,
}

fn read_file(path: &Path) -> Result<String, ProcessError> {
    if !path.exists() {
        return Err(ProcessError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| ProcessError::IoError(e.to_string()))
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md") | Some("markdown")
    )
}

/// Produce the cleaned rendition of a file.
///
/// Markdown: fenced transcript blocks are stripped in place and re-fenced
/// as `python`. Anything else: the whole file is one transcript.
pub fn strip_file<P: AsRef<Path>>(path: P) -> Result<String, ProcessError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if is_markdown(path) {
        Ok(rewrite_markdown(&content))
    } else {
        Ok(strip(&content))
    }
}

/// Report the transcript blocks a discovery pass finds in a file.
pub fn blocks_report<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
) -> Result<String, ProcessError> {
    let content = read_file(path.as_ref())?;
    let mut surface = page_from_markdown(&content);
    let mut registry = BlockRegistry::new();
    let ids = registry.discover(&mut surface);

    let reports: Vec<BlockReport> = ids
        .iter()
        .map(|id| {
            let original = registry.get(id).expect("id was just registered");
            let index = surface.resolve(id).expect("id was just assigned");
            BlockReport {
                id: id.as_str().to_string(),
                language: surface.language_tag(index).map(str::to_string),
                lines: original.lines().count(),
                clean_lines: strip(original).lines().count(),
            }
        })
        .collect();

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)
            .map_err(|e| ProcessError::IoError(e.to_string())),
        OutputFormat::Text => {
            let mut result = String::new();
            for report in &reports {
                result.push_str(&format!(
                    "{}  language={}  lines={}  clean={}\n",
                    report.id,
                    report.language.as_deref().unwrap_or("-"),
                    report.lines,
                    report.clean_lines,
                ));
            }
            Ok(result)
        }
    }
}
