//! Service orchestration tests for the user directory.

use std::sync::Arc;

use crate::auth::{AccessError, Principal};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{Role, UserDomainError, UserId},
    ports::UserRepositoryError,
    services::{
        CreateWorkerRequest, RegisterAdminRequest, UpdateUserRequest, UserDirectoryError,
        UserDirectoryService,
    },
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = UserDirectoryService<InMemoryUserRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    UserDirectoryService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(DefaultClock))
}

fn admin_request() -> RegisterAdminRequest {
    RegisterAdminRequest {
        name: "Site Admin".to_owned(),
        email: "admin@obra.example.com".to_owned(),
        password: "correct horse".to_owned(),
    }
}

fn worker_request(email: &str) -> CreateWorkerRequest {
    CreateWorkerRequest {
        name: "Ana Torres".to_owned(),
        email: email.to_owned(),
        password: "hard hat".to_owned(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_admin_creates_admin_account(service: TestService) {
    let admin = service
        .register_admin(admin_request())
        .await
        .expect("registration should succeed");

    assert_eq!(admin.role(), Role::Admin);
    let listed = service.users().await.expect("listing should succeed");
    assert_eq!(listed, vec![admin]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_admin_rejects_duplicate_email(service: TestService) {
    service
        .register_admin(admin_request())
        .await
        .expect("first registration should succeed");

    let result = service.register_admin(admin_request()).await;
    assert!(matches!(
        result,
        Err(UserDirectoryError::Repository(
            UserRepositoryError::DuplicateEmail(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_admin_rejects_blank_password(service: TestService) {
    let mut request = admin_request();
    request.password = "   ".to_owned();

    let result = service.register_admin(request).await;
    assert!(matches!(
        result,
        Err(UserDirectoryError::Domain(UserDomainError::BlankPassword))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_worker_requires_admin_role(service: TestService) {
    let worker_principal = Principal::new(UserId::new(), Role::Worker);

    let result = service
        .create_worker(&worker_principal, worker_request("ana@obra.example.com"))
        .await;

    assert!(matches!(
        result,
        Err(UserDirectoryError::Access(AccessError::AdminRequired { .. }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_creates_worker_account(service: TestService) {
    let admin = service
        .register_admin(admin_request())
        .await
        .expect("registration should succeed");
    let principal = Principal::from_user(&admin);

    let worker = service
        .create_worker(&principal, worker_request("ana@obra.example.com"))
        .await
        .expect("worker creation should succeed");

    assert_eq!(worker.role(), Role::Worker);
    assert_eq!(
        service.user(worker.id()).await.expect("lookup succeeds"),
        Some(worker)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_user_changes_name_and_role(service: TestService) {
    let admin = service
        .register_admin(admin_request())
        .await
        .expect("registration should succeed");
    let principal = Principal::from_user(&admin);
    let worker = service
        .create_worker(&principal, worker_request("ana@obra.example.com"))
        .await
        .expect("worker creation should succeed");

    let updated = service
        .update_user(
            &principal,
            worker.id(),
            UpdateUserRequest {
                name: Some("Ana T. Ríos".to_owned()),
                role: Some(Role::Admin),
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.name().as_str(), "Ana T. Ríos");
    assert_eq!(updated.role(), Role::Admin);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_user_reports_not_found(service: TestService) {
    let admin = service
        .register_admin(admin_request())
        .await
        .expect("registration should succeed");
    let principal = Principal::from_user(&admin);
    let missing = UserId::new();

    let result = service
        .update_user(&principal, missing, UpdateUserRequest::default())
        .await;
    assert!(matches!(result, Err(UserDirectoryError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_by_email_finds_account_case_insensitively(service: TestService) {
    let admin = service
        .register_admin(admin_request())
        .await
        .expect("registration should succeed");

    let found = service
        .user_by_email("Admin@Obra.Example.Com")
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(admin));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_by_email_returns_none_for_unknown_address(service: TestService) {
    let found = service
        .user_by_email("nobody@obra.example.com")
        .await
        .expect("lookup should succeed");
    assert_eq!(found, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_by_email_rejects_malformed_address(service: TestService) {
    let result = service.user_by_email("not-an-address").await;
    assert!(matches!(
        result,
        Err(UserDirectoryError::Domain(UserDomainError::InvalidEmail(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_user_removes_account(service: TestService) {
    let admin = service
        .register_admin(admin_request())
        .await
        .expect("registration should succeed");
    let principal = Principal::from_user(&admin);
    let worker = service
        .create_worker(&principal, worker_request("ana@obra.example.com"))
        .await
        .expect("worker creation should succeed");

    service
        .delete_user(&principal, worker.id())
        .await
        .expect("deletion should succeed");

    assert_eq!(
        service.user(worker.id()).await.expect("lookup succeeds"),
        None
    );
}
