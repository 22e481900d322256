//! Startup seeding from employee files on disk.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{DirectoryError, DirectoryResult};
use crate::ingestion::{InputFormat, UploadedFile};
use crate::observability::{Operation, OperationContext};
use crate::service::{EmployeeService, RegisterRequest};

/// Register every `.csv`/`.json` file matched by `patterns`, one registration per file.
///
/// Seed data goes through the same duplicate and validation checks as requests. The first
/// failing file stops seeding; files registered before it stay registered.
///
/// Returns the number of employees registered.
pub async fn seed_from_patterns(
    service: &EmployeeService,
    patterns: &[String],
) -> DirectoryResult<usize> {
    let mut total = 0;
    for pattern in patterns {
        let paths = glob::glob(pattern).map_err(|e| DirectoryError::Config {
            message: format!("invalid seed pattern '{pattern}': {e}"),
        })?;

        let mut matched = 0;
        for entry in paths {
            let path = entry.map_err(|e| DirectoryError::Io(e.into_error()))?;
            matched += 1;
            total += seed_file(service, &path).await?;
        }
        if matched == 0 {
            warn!(pattern = %pattern, "seed pattern matched no files");
        }
    }
    Ok(total)
}

async fn seed_file(service: &EmployeeService, path: &Path) -> DirectoryResult<usize> {
    let file_name = path.to_string_lossy().into_owned();
    if InputFormat::from_file_name(&file_name).is_none() {
        warn!(path = %file_name, "skipping seed file with unsupported extension");
        return Ok(0);
    }

    let content = tokio::fs::read(path).await?;
    let ctx = OperationContext::new(Operation::Seed, file_name.clone());
    let request = RegisterRequest::from_files(vec![UploadedFile::new(file_name.clone(), content)]);
    let registered = service.register_with(&ctx, request).await?;

    info!(path = %file_name, records = registered.len(), "seeded employees");
    Ok(registered.len())
}
