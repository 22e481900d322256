//! Response bodies returned by [`super::EmployeeService`].
//!
//! Every body embeds `ErrorCode` / `ErrorDescription`; `ErrorCode == 0` means success.

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, ErrorCode};
use crate::types::Employee;

/// Outcome fields shared by every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    pub error_code: i32,
    pub error_description: String,
}

impl ResponseStatus {
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            error_code: code.as_i32(),
            error_description: code.description().to_owned(),
        }
    }

    pub fn from_error(error: &DirectoryError) -> Self {
        Self::from_code(error.code())
    }

    pub fn is_success(&self) -> bool {
        self.error_code == ErrorCode::Success.as_i32()
    }
}

impl Default for ResponseStatus {
    fn default() -> Self {
        Self::from_code(ErrorCode::Success)
    }
}

/// Result of a registration: the inserted records on success, `null` otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub employees: Option<Vec<Employee>>,
}

/// Result of a name lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeesResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub employees: Option<Vec<Employee>>,
}

/// Result of a paged listing.
///
/// Paging totals are filled in as soon as the store count is known, so an invalid page request
/// still reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PagedResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: i64,
    pub page_size: i64,
    pub employees: Option<Vec<Employee>>,
}
