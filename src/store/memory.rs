//! In-memory employee store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::DirectoryResult;
use crate::types::Employee;

use super::EmployeeStore;

#[derive(Debug, Default)]
struct Inner {
    employees: Vec<Employee>,
    next_id: i64,
}

/// Keeps every record in insertion order behind a [`RwLock`].
///
/// Cloning the store yields another handle to the same data.
///
/// # Example
///
/// ```rust
/// use employee_directory::store::{EmployeeStore, MemoryStore};
///
/// # async fn example() -> Result<(), employee_directory::DirectoryError> {
/// let store = MemoryStore::new();
/// assert_eq!(store.count().await?, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn count(&self) -> DirectoryResult<usize> {
        Ok(self.inner.read().await.employees.len())
    }

    async fn exists_by_email(&self, email: &str) -> DirectoryResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.employees.iter().any(|e| e.email == email))
    }

    async fn find_by_name(&self, name: &str) -> DirectoryResult<Vec<Employee>> {
        let inner = self.inner.read().await;
        Ok(inner
            .employees
            .iter()
            .filter(|e| e.name == name)
            .cloned()
            .collect())
    }

    async fn page(&self, offset: usize, limit: usize) -> DirectoryResult<Vec<Employee>> {
        let inner = self.inner.read().await;
        Ok(inner
            .employees
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert_all(&self, employees: Vec<Employee>) -> DirectoryResult<Vec<Employee>> {
        let mut inner = self.inner.write().await;
        let mut inserted = Vec::with_capacity(employees.len());
        for mut employee in employees {
            inner.next_id += 1;
            employee.id = inner.next_id;
            inner.employees.push(employee.clone());
            inserted.push(employee);
        }
        debug!(
            inserted = inserted.len(),
            total = inner.employees.len(),
            "inserted employees"
        );
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::MemoryStore;
    use crate::store::EmployeeStore;
    use crate::types::Employee;

    fn employee(name: &str, email: &str) -> Employee {
        let joined = NaiveDate::from_ymd_opt(2021, 5, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Employee::new(name, email, "010-1111-2222", joined)
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let first = store
            .insert_all(vec![employee("A", "a@x.com"), employee("B", "b@x.com")])
            .await
            .unwrap();
        let second = store.insert_all(vec![employee("C", "c@x.com")]).await.unwrap();

        assert_eq!(first.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(second[0].id, 3);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn lookups_are_exact() {
        let store = MemoryStore::new();
        store
            .insert_all(vec![
                employee("Ada", "ada@x.com"),
                employee("ada", "ada2@x.com"),
                employee("Ada", "ada3@x.com"),
            ])
            .await
            .unwrap();

        assert!(store.exists_by_email("ada@x.com").await.unwrap());
        assert!(!store.exists_by_email("ADA@x.com").await.unwrap());
        assert_eq!(store.find_by_name("Ada").await.unwrap().len(), 2);
        assert_eq!(store.find_by_name("Ad").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn page_skips_and_takes_in_insertion_order() {
        let store = MemoryStore::new();
        let batch = (0..5)
            .map(|i| employee(&format!("E{i}"), &format!("e{i}@x.com")))
            .collect();
        store.insert_all(batch).await.unwrap();

        let page = store.page(2, 2).await.unwrap();
        assert_eq!(
            page.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["E2", "E3"]
        );
        assert!(store.page(10, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_data() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.insert_all(vec![employee("A", "a@x.com")]).await.unwrap();
        assert_eq!(handle.count().await.unwrap(), 1);
    }
}
