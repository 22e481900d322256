//! `employee-directory` is a small HTTP service for an employee directory: paged listing, name
//! lookup, and bulk registration from CSV or JSON (inline text or uploaded files).
//!
//! The interesting part is the registration pipeline in [`service::EmployeeService`]:
//!
//! 1. inline text is classified as CSV or JSON ([`ingestion::detect_format`]); uploaded files
//!    are dispatched on their extension
//! 2. input is parsed into candidate [`types::Employee`] records ([`ingestion`])
//! 3. each candidate is duplicate-checked against the [`store::EmployeeStore`] and validated
//!    ([`validate::validate`], which also normalizes phone numbers)
//! 4. the whole batch is inserted at once, or nothing is inserted
//!
//! Failures never surface as HTTP errors. Every response embeds an `ErrorCode`
//! ([`error::ErrorCode`], `0` = success) and an `ErrorDescription`.
//!
//! ## Example: register and look up
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use employee_directory::service::{EmployeeService, RegisterRequest};
//! use employee_directory::store::MemoryStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = EmployeeService::new(Arc::new(MemoryStore::new()));
//!
//! let registered = service
//!     .register_employees(RegisterRequest::from_text(
//!         "A,a@x.com,01011112222,2020.01.01\nB,b@x.com,01022223333,2020.02.02",
//!     ))
//!     .await;
//! assert_eq!(registered.status.error_code, 0);
//!
//! let found = service.get_by_name("A").await;
//! assert_eq!(found.employees.unwrap()[0].tel, "010-1111-2222");
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: format detection and CSV/JSON parsing
//! - [`validate`]: email/phone validation
//! - [`store`]: storage trait and the in-memory store
//! - [`service`]: registration and query operations, response bodies
//! - [`observability`]: outcome observers
//! - [`server`]: axum router, configuration and logging setup
//! - [`error`]: error codes and the error type used across the crate

pub mod error;
pub mod ingestion;
pub mod observability;
pub mod server;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{DirectoryError, DirectoryResult, ErrorCode};
