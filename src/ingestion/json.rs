//! JSON employee parsing.
//!
//! Input is a JSON array of employee objects:
//! `[{"name":"Ada","email":"ada@x.com","tel":"01011112222","joined":"2020-01-01"}]`.
//! `id` may be omitted. A literal `null` yields no records.
//!
//! Malformed JSON is reported as [`crate::DirectoryError::Json`] and is never narrowed into a
//! classified error code.

use std::io::Read;

use crate::error::DirectoryResult;
use crate::types::Employee;

/// Parse employees from an in-memory JSON string.
pub fn parse_json_str(input: &str) -> DirectoryResult<Vec<Employee>> {
    let employees: Option<Vec<Employee>> = serde_json::from_str(input)?;
    Ok(employees.unwrap_or_default())
}

/// Parse employees from JSON file content.
pub fn parse_json_from_reader<R: Read>(reader: R) -> DirectoryResult<Vec<Employee>> {
    let employees: Option<Vec<Employee>> = serde_json::from_reader(reader)?;
    Ok(employees.unwrap_or_default())
}
