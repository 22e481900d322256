use std::fmt;

use thiserror::Error;

/// Convenience result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Numeric outcome codes reported in every response body.
///
/// `Success` is `0`, `Unknown` is `-1`, and the remaining variants count up from `1` in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Catch-all for failures that were not classified.
    Unknown,
    Success,
    /// Inline text is neither CSV nor JSON.
    UnknownFileFormat,
    /// A CSV record line did not have exactly four fields.
    InvalidDataFormat,
    AlreadyExistEmail,
    InvalidEmailFormat,
    InvalidTelFormat,
    InvalidPageOrPageSize,
    NotExistEmployee,
}

impl ErrorCode {
    /// The numeric value sent as `ErrorCode`.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::Success => 0,
            Self::UnknownFileFormat => 1,
            Self::InvalidDataFormat => 2,
            Self::AlreadyExistEmail => 3,
            Self::InvalidEmailFormat => 4,
            Self::InvalidTelFormat => 5,
            Self::InvalidPageOrPageSize => 6,
            Self::NotExistEmployee => 7,
        }
    }

    /// Human readable text sent as `ErrorDescription`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error.",
            Self::Success => "Success",
            Self::UnknownFileFormat => "Unsupported data format.",
            Self::InvalidDataFormat => "Invalid data layout.",
            Self::AlreadyExistEmail => "Email address already exists.",
            Self::InvalidEmailFormat => "Invalid email format.",
            Self::InvalidTelFormat => "Invalid phone number format.",
            Self::InvalidPageOrPageSize => "Invalid page number or page size.",
            Self::NotExistEmployee => "Employee does not exist.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.as_i32())
    }
}

/// Error type returned by every stage of the directory pipeline.
///
/// [`DirectoryError::Domain`] carries a classified [`ErrorCode`]. All other variants are
/// unclassified failures and report [`ErrorCode::Unknown`] through [`DirectoryError::code`].
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A classified failure with the offending value (email, phone, input text, ...).
    #[error("{}: {}", .code.description(), .detail)]
    Domain { code: ErrorCode, detail: String },

    /// JSON input could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV input could not be read.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A joined date did not match any supported layout.
    #[error("failed to parse joined date (raw='{raw}')")]
    Date { raw: String },

    /// Uploaded file content is not UTF-8.
    #[error("file '{file_name}' is not valid utf-8: {source}")]
    Utf8 {
        file_name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Underlying I/O error (seed files, ingestion log file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The multipart request body could not be read.
    #[error("multipart error: {message}")]
    Multipart { message: String },

    /// The backing store failed.
    #[error("store error: {message}")]
    Store { message: String },

    /// Startup configuration could not be applied (bad seed pattern, ...).
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl DirectoryError {
    /// Build a classified failure.
    pub fn domain(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Domain {
            code,
            detail: detail.into(),
        }
    }

    /// The code reported to callers for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Domain { code, .. } => *code,
            _ => ErrorCode::Unknown,
        }
    }

    /// `true` for failures that carry a specific [`ErrorCode`].
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
