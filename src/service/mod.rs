//! Registration and query operations over an [`EmployeeStore`].
//!
//! [`EmployeeService`] is the boundary where [`DirectoryError`]s become response bodies: every
//! public operation returns a response whose `ErrorCode` describes the outcome, and reports the
//! outcome to the configured [`DirectoryObserver`].

mod response;

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{DirectoryError, DirectoryResult, ErrorCode};
use crate::ingestion::{UploadedFile, parse_text, parse_uploaded_files};
use crate::observability::{
    DirectoryObserver, Operation, OperationContext, OperationStats, Severity, TracingObserver,
    severity_for_error,
};
use crate::store::EmployeeStore;
use crate::types::Employee;
use crate::validate::validate;

pub use response::{EmployeesResponse, PagedResponse, RegisterResponse, ResponseStatus};

/// Input of a registration: uploaded files and/or one inline text blob.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub files: Vec<UploadedFile>,
    /// Inline CSV or JSON text.
    pub member_infos: Option<String>,
}

impl RegisterRequest {
    /// A request carrying only inline text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            member_infos: Some(text.into()),
        }
    }

    /// A request carrying only uploaded files.
    pub fn from_files(files: Vec<UploadedFile>) -> Self {
        Self {
            files,
            member_infos: None,
        }
    }

    fn describe(&self) -> String {
        let names: Vec<&str> = self.files.iter().map(|f| f.file_name.as_str()).collect();
        match &self.member_infos {
            Some(text) => format!("files={names:?} memberinfos_len={}", text.len()),
            None => format!("files={names:?} memberinfos=none"),
        }
    }
}

/// Employee directory operations.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    observer: Arc<dyn DirectoryObserver>,
    alert_at_or_above: Severity,
    // Held from the duplicate check through the insert.
    register_lock: Mutex<()>,
}

impl fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeService")
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish_non_exhaustive()
    }
}

impl EmployeeService {
    /// Create a service that logs outcomes through [`TracingObserver`] and alerts on
    /// [`Severity::Critical`] failures.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            store,
            observer: Arc::new(TracingObserver),
            alert_at_or_above: Severity::Critical,
            register_lock: Mutex::new(()),
        }
    }

    /// Replace the outcome observer.
    pub fn with_observer(mut self, observer: Arc<dyn DirectoryObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Severity at which `on_alert` is invoked.
    pub fn with_alert_threshold(mut self, severity: Severity) -> Self {
        self.alert_at_or_above = severity;
        self
    }

    pub fn store(&self) -> &Arc<dyn EmployeeStore> {
        &self.store
    }

    /// Register every employee in `request`, all or nothing.
    ///
    /// On success the response lists the inserted records with their ids. On failure
    /// `Employees` is `null` and the store is unchanged.
    pub async fn register_employees(&self, request: RegisterRequest) -> RegisterResponse {
        let ctx = OperationContext::new(Operation::Register, request.describe());
        match self.register_with(&ctx, request).await {
            Ok(employees) => RegisterResponse {
                status: ResponseStatus::default(),
                employees: Some(employees),
            },
            Err(e) => RegisterResponse {
                status: ResponseStatus::from_error(&e),
                employees: None,
            },
        }
    }

    /// Register `request` under an explicit context and return the raw result.
    ///
    /// The outcome is still reported to the observer. Used for startup seeding, where a failure
    /// must stop the caller.
    pub async fn register_with(
        &self,
        ctx: &OperationContext,
        request: RegisterRequest,
    ) -> DirectoryResult<Vec<Employee>> {
        let result = self.register_batch(request).await;
        self.report(ctx, &result);
        result
    }

    async fn register_batch(&self, request: RegisterRequest) -> DirectoryResult<Vec<Employee>> {
        let mut batch = parse_uploaded_files(&request.files)?;
        if let Some(text) = request.member_infos.as_deref() {
            batch.extend(parse_text(text)?);
        }

        let _guard = self.register_lock.lock().await;
        for employee in &mut batch {
            if self.store.exists_by_email(&employee.email).await? {
                return Err(DirectoryError::domain(
                    ErrorCode::AlreadyExistEmail,
                    format!("duplicated email {}", employee.email),
                ));
            }
            validate(employee)?;
        }

        self.store.insert_all(batch).await
    }

    /// List one page of employees.
    ///
    /// `page` is 1-based. Pages past the end return an empty list.
    pub async fn get_paged(&self, page: i64, page_size: i64) -> PagedResponse {
        let ctx = OperationContext::new(
            Operation::Paged,
            format!("page={page} pageSize={page_size}"),
        );
        let mut response = PagedResponse::default();

        let result = self.load_page(page, page_size, &mut response).await;
        self.report(&ctx, &result);
        match result {
            Ok(employees) => response.employees = Some(employees),
            Err(e) => response.status = ResponseStatus::from_error(&e),
        }
        response
    }

    async fn load_page(
        &self,
        page: i64,
        page_size: i64,
        response: &mut PagedResponse,
    ) -> DirectoryResult<Vec<Employee>> {
        let total_count = self.store.count().await?;
        if total_count == 0 {
            return Err(DirectoryError::domain(
                ErrorCode::NotExistEmployee,
                "employee count zero",
            ));
        }

        response.total_count = total_count;
        response.total_pages = match usize::try_from(page_size) {
            Ok(size) if size > 0 => total_count.div_ceil(size),
            _ => 0,
        };
        response.current_page = page;
        response.page_size = page_size;

        if page < 1 || page_size < 1 {
            return Err(DirectoryError::domain(
                ErrorCode::InvalidPageOrPageSize,
                format!("request page : {page}, pageSize : {page_size}"),
            ));
        }

        let offset = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let limit = usize::try_from(page_size).unwrap_or(usize::MAX);
        self.store.page(offset, limit).await
    }

    /// Find employees whose name equals `name` exactly.
    pub async fn get_by_name(&self, name: &str) -> EmployeesResponse {
        let ctx = OperationContext::new(Operation::ByName, format!("name={name}"));
        let mut response = EmployeesResponse::default();

        let result = self.load_by_name(name, &mut response).await;
        self.report(&ctx, &result);
        if let Err(e) = &result {
            response.status = ResponseStatus::from_error(e);
        }
        response
    }

    async fn load_by_name(
        &self,
        name: &str,
        response: &mut EmployeesResponse,
    ) -> DirectoryResult<usize> {
        if self.store.count().await? == 0 {
            return Err(DirectoryError::domain(
                ErrorCode::NotExistEmployee,
                "employee count zero",
            ));
        }

        let employees = self.store.find_by_name(name).await?;
        let found = employees.len();
        response.employees = Some(employees);
        if found == 0 {
            return Err(DirectoryError::domain(
                ErrorCode::NotExistEmployee,
                format!("request name : {name}"),
            ));
        }
        Ok(found)
    }

    fn report<T: RecordCount>(&self, ctx: &OperationContext, result: &DirectoryResult<T>) {
        match result {
            Ok(value) => self.observer.on_success(
                ctx,
                OperationStats {
                    records: value.record_count(),
                },
            ),
            Err(e) => {
                let severity = severity_for_error(e);
                self.observer.on_failure(ctx, severity, e);
                if severity >= self.alert_at_or_above {
                    self.observer.on_alert(ctx, severity, e);
                }
            }
        }
    }
}

trait RecordCount {
    fn record_count(&self) -> usize;
}

impl RecordCount for Vec<Employee> {
    fn record_count(&self) -> usize {
        self.len()
    }
}

impl RecordCount for usize {
    fn record_count(&self) -> usize {
        *self
    }
}
