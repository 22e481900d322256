//! Unified entry points for registration input.
//!
//! A registration request carries zero or more uploaded files and optionally one inline text
//! blob. This module turns both into candidate [`Employee`] records:
//!
//! - [`parse_text`] detects the format of inline text with [`detect_format`].
//! - [`parse_uploaded_files`] picks the format from each file name's extension and silently
//!   skips files whose extension is not `.csv` or `.json`.

use std::fmt;

use crate::error::{DirectoryError, DirectoryResult};
use crate::types::Employee;

use super::detect::{InputFormat, detect_format};
use super::{csv, json};

/// A file received as part of a registration request.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client supplied file name. Only its extension is used.
    pub file_name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Format implied by the file extension, if supported.
    pub fn format(&self) -> Option<InputFormat> {
        InputFormat::from_file_name(&self.file_name)
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// Parse inline registration text (CSV or JSON, auto-detected).
///
/// # Examples
///
/// ```rust
/// use employee_directory::ingestion::parse_text;
///
/// # fn main() -> Result<(), employee_directory::DirectoryError> {
/// let employees = parse_text("A,a@x.com,01011112222,2020.01.01\nB,b@x.com,01022223333,2020.02.02")?;
/// assert_eq!(employees.len(), 2);
/// assert_eq!(employees[1].email, "b@x.com");
/// # Ok(())
/// # }
/// ```
pub fn parse_text(input: &str) -> DirectoryResult<Vec<Employee>> {
    match detect_format(input)? {
        InputFormat::Csv => csv::parse_csv_str(input),
        InputFormat::Json => json::parse_json_str(input),
    }
}

/// Parse a single uploaded file, dispatching on its extension.
///
/// Files with an unsupported or missing extension produce no records.
pub fn parse_uploaded_file(file: &UploadedFile) -> DirectoryResult<Vec<Employee>> {
    let Some(format) = file.format() else {
        return Ok(Vec::new());
    };

    let text = std::str::from_utf8(&file.content).map_err(|source| DirectoryError::Utf8 {
        file_name: file.file_name.clone(),
        source,
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match format {
        InputFormat::Csv => csv::parse_csv_from_reader(text.as_bytes()),
        InputFormat::Json => json::parse_json_from_reader(text.as_bytes()),
    }
}

/// Parse every uploaded file in order and concatenate the records.
pub fn parse_uploaded_files(files: &[UploadedFile]) -> DirectoryResult<Vec<Employee>> {
    let mut employees = Vec::new();
    for file in files {
        employees.extend(parse_uploaded_file(file)?);
    }
    Ok(employees)
}
