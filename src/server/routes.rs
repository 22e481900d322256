//! HTTP route handlers and router configuration
//!
//! Logical failures never change the HTTP status: reads answer 200 and registration answers
//! 201, with the outcome in the body's `ErrorCode`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, Query, State, multipart::MultipartRejection},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::{DirectoryError, DirectoryResult};
use crate::ingestion::UploadedFile;
use crate::service::{
    EmployeesResponse, PagedResponse, RegisterRequest, RegisterResponse, ResponseStatus,
};

use super::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/employee", get(get_paged_employees).post(register_employees))
        .route("/employee/{name}", get(get_employee))
        .layer(DefaultBodyLimit::max(state.config.body_limit))
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

async fn health() -> Json<JsonValue> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Paging query parameters. Missing values default to 0, which is rejected as an invalid page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    #[serde(default)]
    page: i64,
    #[serde(default)]
    page_size: i64,
}

async fn get_paged_employees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<PagedResponse> {
    Json(state.service.get_paged(query.page, query.page_size).await)
}

async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<EmployeesResponse> {
    Json(state.service.get_by_name(&name).await)
}

async fn register_employees(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Json<RegisterResponse>) {
    let request = match multipart {
        Ok(multipart) => read_register_request(multipart).await,
        Err(rejection) => Err(DirectoryError::Multipart {
            message: rejection.body_text(),
        }),
    };

    let response = match request {
        Ok(request) => state.service.register_employees(request).await,
        Err(e) => {
            error!(error = %e, "failed to read registration form");
            RegisterResponse {
                status: ResponseStatus::from_error(&e),
                employees: None,
            }
        }
    };

    (StatusCode::CREATED, Json(response))
}

/// Collect `files` (or `files[]`) parts and the `memberinfos` text part. Other parts are
/// ignored; an empty `memberinfos` counts as absent.
async fn read_register_request(mut multipart: Multipart) -> DirectoryResult<RegisterRequest> {
    let mut request = RegisterRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_ascii_lowercase();
        match name.as_str() {
            "files" | "files[]" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content = field.bytes().await.map_err(multipart_error)?;
                request.files.push(UploadedFile::new(file_name, content.to_vec()));
            }
            "memberinfos" => {
                let text = field.text().await.map_err(multipart_error)?;
                if !text.is_empty() {
                    request.member_infos = Some(text);
                }
            }
            _ => {}
        }
    }

    Ok(request)
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> DirectoryError {
    DirectoryError::Multipart {
        message: e.body_text(),
    }
}
