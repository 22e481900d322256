//! Input format classification for inline text and uploaded file names.

use std::path::Path;

use crate::error::{DirectoryError, DirectoryResult, ErrorCode};

/// Supported employee input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated `name,email,tel,joined` lines.
    Csv,
    /// A JSON array of employee objects.
    Json,
}

impl InputFormat {
    /// Parse an input format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Infer the format from a file name. `None` when the extension is missing or unsupported.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }
}

/// Classify an inline text blob.
///
/// Text wrapped in `[...]` or `{...}` that contains both braces is JSON; otherwise text with a
/// comma is CSV. Anything else fails with [`ErrorCode::UnknownFileFormat`].
pub fn detect_format(input: &str) -> DirectoryResult<InputFormat> {
    let input = input.trim();

    let wrapped = (input.starts_with('[') && input.ends_with(']'))
        || (input.starts_with('{') && input.ends_with('}'));
    if wrapped && input.contains('{') && input.contains('}') {
        return Ok(InputFormat::Json);
    }
    if input.contains(',') {
        return Ok(InputFormat::Csv);
    }

    Err(DirectoryError::domain(ErrorCode::UnknownFileFormat, input))
}
