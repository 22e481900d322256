use std::fs;
use std::sync::Arc;

use employee_directory::ErrorCode;
use employee_directory::ingestion::UploadedFile;
use employee_directory::service::{EmployeeService, RegisterRequest};
use employee_directory::store::{EmployeeStore, MemoryStore};

fn fixture(name: &str) -> UploadedFile {
    let content = fs::read(format!("tests/fixtures/{name}")).unwrap();
    UploadedFile::new(name, content)
}

async fn seeded_service() -> EmployeeService {
    let service = EmployeeService::new(Arc::new(MemoryStore::new()));
    let response = service
        .register_employees(RegisterRequest::from_files(vec![fixture("employees.json")]))
        .await;
    assert!(response.status.is_success(), "{:?}", response.status);
    service
}

async fn count(service: &EmployeeService) -> usize {
    service.store().count().await.unwrap()
}

#[tokio::test]
async fn seed_fixture_registers_twelve_with_ids() {
    let service = seeded_service().await;
    assert_eq!(count(&service).await, 12);

    let first = service.store().page(0, 12).await.unwrap();
    let ids: Vec<i64> = first.iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<i64>>());
    // Unhyphenated seed phone numbers are normalized on the way in.
    assert_eq!(first[1].tel, "010-2345-6789");
}

#[tokio::test]
async fn csv_text_registers_and_normalizes_phone() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            "Kang Chulsoo,gangles@tmail.com,01025312468,2016.02.06\r\n\
             Gu Younghee,gutilda@tmail.com,010-1765-4321,2020.03.27",
        ))
        .await;

    assert_eq!(response.status.error_code, 0);
    let employees = response.employees.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].id, 13);
    assert_eq!(employees[0].tel, "010-2531-2468");
    assert_eq!(employees[1].tel, "010-1765-4321");
    assert_eq!(count(&service).await, 14);
}

#[tokio::test]
async fn csv_text_with_extra_fields_is_rejected() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            "Kang Chulsoo,gangles@tmail.com,01025312468,2016.02.06,,\r\n\
             Gu Younghee,gutilda@tmail.com,01017654321,2020.03.27,,,,",
        ))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::InvalidDataFormat.as_i32());
    assert_eq!(
        response.status.error_description,
        ErrorCode::InvalidDataFormat.description()
    );
    assert!(response.employees.is_none());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn csv_text_with_trailing_newline_is_rejected() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            "Kang Chulsoo,gangles@tmail.com,01025312468,2016.02.06\n",
        ))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::InvalidDataFormat.as_i32());
    assert!(response.employees.is_none());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn csv_text_with_blank_line_is_rejected() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            "Kang Chulsoo,gangles@tmail.com,01025312468,2016.02.06\n\n\
             Gu Younghee,gutilda@tmail.com,01017654321,2020.03.27",
        ))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::InvalidDataFormat.as_i32());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn csv_file_with_blank_line_is_unknown() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_files(vec![UploadedFile::new(
            "gap.csv",
            "Kang Chulsoo,gangles@tmail.com,01025312468,2016.02.06\r\n\r\n\
             Gu Younghee,gutilda@tmail.com,01017654321,2020.03.27\r\n",
        )]))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::Unknown.as_i32());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn csv_file_registers_every_line() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_files(vec![fixture("employees.csv")]))
        .await;

    assert!(response.status.is_success());
    assert_eq!(response.employees.unwrap().len(), 6);
    assert_eq!(count(&service).await, 18);
}

#[tokio::test]
async fn csv_file_with_existing_email_registers_nothing() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_files(vec![fixture("employees_fail.csv")]))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::AlreadyExistEmail.as_i32());
    assert!(response.employees.is_none());
    // The first line was new, but the batch is all or nothing.
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn json_text_registers_one() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            r#"[{"name":"Kim Daehee","email":"daehee.kim@tmail.com","tel":"010-6528-0153","joined":"2024-01-02"}]"#,
        ))
        .await;

    assert!(response.status.is_success());
    assert_eq!(count(&service).await, 13);
}

#[tokio::test]
async fn json_text_without_closing_bracket_is_invalid_data_format() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            r#"[{"name":"Kim Daehee","email":"daehee.kim@tmail.com","tel":"010-6528-0153","joined":"2024-01-02"}"#,
        ))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::InvalidDataFormat.as_i32());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn json_file_registers_every_record() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_files(vec![fixture("employees_add.json")]))
        .await;

    assert!(response.status.is_success());
    let employees = response.employees.unwrap();
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[1].tel, "010-3333-4444");
    assert_eq!(count(&service).await, 15);
}

#[tokio::test]
async fn malformed_json_file_is_unknown() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_files(vec![fixture("employees_fail.json")]))
        .await;

    assert_eq!(response.status.error_code, -1);
    assert!(response.employees.is_none());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn files_and_text_are_registered_together() {
    let service = seeded_service().await;
    let request = RegisterRequest {
        files: vec![fixture("employees_add.json")],
        member_infos: Some("Jo Insung,insung.jo@tmail.com,01012121212,2020.05.05".to_string()),
    };
    let response = service.register_employees(request).await;

    let employees = response.employees.unwrap();
    assert_eq!(employees.len(), 4);
    assert_eq!(employees[3].email, "insung.jo@tmail.com");
    assert_eq!(count(&service).await, 16);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            "A,a@x.com,01011112222,2020.01.01\nB,b-at-x.com,01022223333,2020.02.02",
        ))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::InvalidEmailFormat.as_i32());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn invalid_phone_is_rejected() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text("A,a@x.com,010-111-2222,2020.01.01"))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::InvalidTelFormat.as_i32());
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn unsupported_files_are_skipped() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_files(vec![UploadedFile::new(
            "notes.txt",
            "A,a@x.com,01011112222,2020.01.01",
        )]))
        .await;

    assert!(response.status.is_success());
    assert_eq!(response.employees, Some(Vec::new()));
    assert_eq!(count(&service).await, 12);
}

#[tokio::test]
async fn empty_request_succeeds_with_empty_list() {
    let service = seeded_service().await;
    let response = service.register_employees(RegisterRequest::default()).await;

    assert!(response.status.is_success());
    assert_eq!(response.employees, Some(Vec::new()));
}

#[tokio::test]
async fn duplicates_within_one_batch_are_accepted() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text(
            "A,same@x.com,01011112222,2020.01.01\nB,same@x.com,01022223333,2020.02.02",
        ))
        .await;

    assert!(response.status.is_success());
    assert_eq!(count(&service).await, 14);
}

#[tokio::test]
async fn plain_text_is_unknown_file_format() {
    let service = seeded_service().await;
    let response = service
        .register_employees(RegisterRequest::from_text("just some words"))
        .await;

    assert_eq!(response.status.error_code, ErrorCode::UnknownFileFormat.as_i32());
    assert!(response.employees.is_none());
}

#[tokio::test]
async fn concurrent_registrations_of_same_email_insert_once() {
    let service = Arc::new(EmployeeService::new(Arc::new(MemoryStore::new())));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .register_employees(RegisterRequest::from_text(
                    "A,race@x.com,01011112222,2020.01.01",
                ))
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().status.is_success() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(service.store().count().await.unwrap(), 1);
}
