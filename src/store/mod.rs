//! Persistence interface for employee records.
//!
//! The service layer only talks to an [`EmployeeStore`]; [`MemoryStore`] is the shipped
//! implementation and doubles as the test store.

mod memory;

use async_trait::async_trait;

use crate::error::DirectoryResult;
use crate::types::Employee;

pub use memory::MemoryStore;

/// Storage capability consumed by [`crate::service::EmployeeService`].
///
/// Backend failures are reported as [`crate::DirectoryError::Store`]; the service answers them
/// with `ErrorCode::Unknown` and raises an alert.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Total number of stored records.
    async fn count(&self) -> DirectoryResult<usize>;

    /// Whether a record with exactly this email is stored.
    async fn exists_by_email(&self, email: &str) -> DirectoryResult<bool>;

    /// All records whose name equals `name` (case-sensitive).
    async fn find_by_name(&self, name: &str) -> DirectoryResult<Vec<Employee>>;

    /// Up to `limit` records starting at `offset`, in insertion order.
    async fn page(&self, offset: usize, limit: usize) -> DirectoryResult<Vec<Employee>>;

    /// Insert a batch, assigning ids. Returns the stored records.
    async fn insert_all(&self, employees: Vec<Employee>) -> DirectoryResult<Vec<Employee>>;
}
