//! Outcome reporting for directory operations.
//!
//! [`crate::service::EmployeeService`] reports every registration, page read and name lookup to
//! a [`DirectoryObserver`]. Failures carry a [`Severity`] computed by [`severity_for_error`]:
//! classified failures (bad email, duplicate, ...) are [`Severity::Error`], everything else is
//! [`Severity::Critical`]. Failures at or above the service's alert threshold are additionally
//! sent to [`DirectoryObserver::on_alert`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{error, info, warn};

use crate::error::DirectoryError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// A classified failure reported back to the caller.
    Error,
    /// An unclassified failure (malformed JSON, unparseable date, store or I/O failure).
    Critical,
}

/// The directory operation an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Paged,
    ByName,
    Seed,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Register => "register",
            Self::Paged => "paged",
            Self::ByName => "by_name",
            Self::Seed => "seed",
        };
        f.write_str(s)
    }
}

/// Context about a single operation.
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub operation: Operation,
    /// Free-form description of the input (request arguments, seed file path, ...).
    pub source: String,
}

impl OperationContext {
    pub fn new(operation: Operation, source: impl Into<String>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }
}

/// Minimal stats reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStats {
    /// Number of employee records inserted or returned.
    pub records: usize,
}

/// Observer interface for operation outcomes.
pub trait DirectoryObserver: Send + Sync {
    /// Called when an operation succeeds.
    fn on_success(&self, _ctx: &OperationContext, _stats: OperationStats) {}

    /// Called when an operation fails.
    fn on_failure(&self, _ctx: &OperationContext, _severity: Severity, _error: &DirectoryError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Classify a failure for observers.
pub fn severity_for_error(e: &DirectoryError) -> Severity {
    if e.is_classified() {
        Severity::Error
    } else {
        Severity::Critical
    }
}

/// Fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn DirectoryObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn DirectoryObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl DirectoryObserver for CompositeObserver {
    fn on_success(&self, ctx: &OperationContext, stats: OperationStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits `tracing` events. Classified failures log at `WARN`, unclassified ones at `ERROR`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl DirectoryObserver for TracingObserver {
    fn on_success(&self, ctx: &OperationContext, stats: OperationStats) {
        info!(
            operation = %ctx.operation,
            source = %ctx.source,
            records = stats.records,
            "directory operation succeeded"
        );
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        let code = error.code();
        if severity >= Severity::Critical {
            error!(
                operation = %ctx.operation,
                source = %ctx.source,
                code = code.as_i32(),
                error = %error,
                "directory operation failed"
            );
        } else {
            warn!(
                operation = %ctx.operation,
                source = %ctx.source,
                code = code.as_i32(),
                error = %error,
                "directory operation rejected"
            );
        }
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        error!(
            alert = true,
            operation = %ctx.operation,
            source = %ctx.source,
            severity = ?severity,
            error = %error,
            "directory operation alert"
        );
    }
}

/// Appends events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {line}", Utc::now().to_rfc3339());
        }
    }
}

impl DirectoryObserver for FileObserver {
    fn on_success(&self, ctx: &OperationContext, stats: OperationStats) {
        self.append_line(&format!(
            "ok operation={} source={} records={}",
            ctx.operation, ctx.source, stats.records
        ));
    }

    fn on_failure(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        self.append_line(&format!(
            "fail severity={:?} operation={} source={} code={} err={}",
            severity,
            ctx.operation,
            ctx.source,
            error.code().as_i32(),
            error
        ));
    }

    fn on_alert(&self, ctx: &OperationContext, severity: Severity, error: &DirectoryError) {
        self.append_line(&format!(
            "ALERT severity={:?} operation={} source={} code={} err={}",
            severity,
            ctx.operation,
            ctx.source,
            error.code().as_i32(),
            error
        ));
    }
}
