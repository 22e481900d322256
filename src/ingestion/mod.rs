//! Turning registration input into candidate employee records.
//!
//! Most callers should use [`parse_text`] and [`parse_uploaded_files`] (from [`upload`]), which:
//!
//! - detect the format of inline text ([`detect::detect_format`]) or pick it from a file's
//!   extension ([`InputFormat::from_extension`])
//! - parse CSV lines or JSON arrays into [`crate::types::Employee`] values
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]
//! - [`date`] (joined-date parsing shared by both)

pub mod csv;
pub mod date;
pub mod detect;
pub mod json;
pub mod upload;

pub use detect::{InputFormat, detect_format};
pub use upload::{UploadedFile, parse_text, parse_uploaded_file, parse_uploaded_files};
