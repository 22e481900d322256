//! CSV employee parsing.
//!
//! Every record line is `name,email,tel,joined`. There is no header row and no quoting: a comma
//! always separates fields. Fields are trimmed. An empty line is a record with no fields, so it
//! fails like any other malformed line.

use std::io::Read;

use csv::StringRecord;

use crate::error::{DirectoryError, DirectoryResult, ErrorCode};
use crate::types::Employee;

use super::date::parse_joined;

/// Number of fields in an employee record line.
pub const EMPLOYEE_FIELD_COUNT: usize = 4;

/// Parse inline CSV text.
///
/// Rules:
///
/// - Each `\n`-separated line must have exactly [`EMPLOYEE_FIELD_COUNT`] fields, otherwise the
///   whole input is rejected with [`ErrorCode::InvalidDataFormat`] (the error cites the full
///   input). This includes empty lines and the empty line after a trailing newline.
/// - The joined date is parsed with [`parse_joined`].
pub fn parse_csv_str(input: &str) -> DirectoryResult<Vec<Employee>> {
    let mut employees = Vec::new();
    for record in line_records(input, input.split('\n'))? {
        if record.len() != EMPLOYEE_FIELD_COUNT {
            return Err(DirectoryError::domain(ErrorCode::InvalidDataFormat, input));
        }
        employees.push(employee_from_record(&record)?);
    }
    Ok(employees)
}

/// Parse CSV content from an uploaded file.
///
/// Unlike [`parse_csv_str`] the field count is not checked: missing trailing fields read as
/// empty text (so a short or empty line fails when its joined date is parsed) and extra fields
/// are ignored. A single trailing newline does not start another line.
pub fn parse_csv_from_reader<R: Read>(mut reader: R) -> DirectoryResult<Vec<Employee>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut employees = Vec::new();
    for record in line_records(&text, text.lines())? {
        employees.push(employee_from_record(&record)?);
    }
    Ok(employees)
}

/// One record per entry of `lines`, in order.
///
/// The csv reader skips empty lines; they are put back here as empty records.
fn line_records<'a>(
    text: &str,
    lines: impl Iterator<Item = &'a str>,
) -> DirectoryResult<Vec<StringRecord>> {
    let mut rdr = reader_builder().from_reader(text.as_bytes());
    let mut parsed = rdr.records();

    let mut records = Vec::new();
    for line in lines {
        if line.trim_end_matches('\r').is_empty() {
            records.push(StringRecord::new());
        } else if let Some(record) = parsed.next() {
            records.push(record?);
        }
    }
    for record in parsed {
        records.push(record?);
    }
    Ok(records)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All);
    builder
}

fn employee_from_record(record: &StringRecord) -> DirectoryResult<Employee> {
    let field = |idx: usize| record.get(idx).unwrap_or("");
    Ok(Employee::new(
        field(0),
        field(1),
        field(2),
        parse_joined(field(3))?,
    ))
}
