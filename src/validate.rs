//! Field validation for candidate employee records.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DirectoryError, DirectoryResult, ErrorCode};
use crate::types::Employee;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

static TEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-?\d{4}-?\d{4}$").expect("valid tel regex"));

/// Length of a phone number written without hyphens.
const TEL_DIGITS: usize = 11;

/// Check a record's email and phone, normalizing the phone in place.
///
/// - The email must look like `local@domain.tld`, else [`ErrorCode::InvalidEmailFormat`].
/// - The phone must be `XXX-XXXX-XXXX` with optional hyphens, else
///   [`ErrorCode::InvalidTelFormat`].
/// - An 11-digit phone without hyphens is rewritten to `XXX-XXXX-XXXX`.
///
/// Name and joined date are not touched.
pub fn validate(employee: &mut Employee) -> DirectoryResult<()> {
    if !EMAIL_PATTERN.is_match(&employee.email) {
        return Err(DirectoryError::domain(
            ErrorCode::InvalidEmailFormat,
            employee.email.clone(),
        ));
    }

    if !TEL_PATTERN.is_match(&employee.tel) {
        return Err(DirectoryError::domain(
            ErrorCode::InvalidTelFormat,
            employee.tel.clone(),
        ));
    }

    if employee.tel.len() == TEL_DIGITS && !employee.tel.contains('-') {
        employee.tel = format!(
            "{}-{}-{}",
            &employee.tel[..3],
            &employee.tel[3..7],
            &employee.tel[7..]
        );
    }

    Ok(())
}
