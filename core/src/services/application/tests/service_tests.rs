//! Unit tests for the application lifecycle service

use std::sync::Arc;

use cr_shared::PageRequest;

use crate::domain::entities::application::{ApplicationDraft, STATUS_COMPLETED, STATUS_PENDING};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockApplicationRepository;
use crate::services::application::ApplicationService;

fn service() -> ApplicationService<MockApplicationRepository> {
    ApplicationService::new(Arc::new(MockApplicationRepository::new()))
}

fn draft(description: &str) -> ApplicationDraft {
    ApplicationDraft {
        phone_number: Some("+79990001122".to_string()),
        photo: Some(vec![0xFF, 0xD8]),
        longitude: Some(49.1221),
        latitude: Some(55.7887),
        description: Some(description.to_string()),
    }
}

#[tokio::test]
async fn test_create_assigns_pending_id_and_timestamp() {
    let service = service();

    let first = service.create(draft("Pothole on Lenina st.")).await.unwrap();
    let second = service.create(draft("Graffiti")).await.unwrap();

    assert_eq!(first.status, STATUS_PENDING);
    assert!(second.id > first.id);
    assert!(second.created_at >= first.created_at);
    assert_eq!(service.get(first.id).await.unwrap(), first);
}

#[tokio::test]
async fn test_create_requires_all_fields() {
    let service = service();
    let mut incomplete = draft("x");
    incomplete.description = None;

    let result = service.create(incomplete).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_transition_accepts_any_status() {
    let service = service();
    let app = service.create(draft("Broken bench")).await.unwrap();

    for status in [STATUS_COMPLETED, "Pending", "In progress", "Completed", "Rejected"] {
        let updated = service.transition(app.id, status).await.unwrap();
        assert_eq!(updated.status, status);
        // Nothing but the status changes
        assert_eq!(updated.created_at, app.created_at);
        assert_eq!(updated.description, app.description);
    }
}

#[tokio::test]
async fn test_transition_missing_is_not_found() {
    let service = service();
    let result = service.transition(404, STATUS_COMPLETED).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_transition_rejects_empty_status() {
    let service = service();
    let app = service.create(draft("x")).await.unwrap();

    let result = service.transition(app.id, "").await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
    assert_eq!(service.get(app.id).await.unwrap().status, STATUS_PENDING);
}

#[tokio::test]
async fn test_list_filters_exact_status() {
    let service = service();
    let a = service.create(draft("a")).await.unwrap();
    let b = service.create(draft("b")).await.unwrap();
    let c = service.create(draft("c")).await.unwrap();
    service.transition(a.id, "Completed").await.unwrap();
    service.transition(b.id, "completed").await.unwrap();
    service.transition(c.id, "Completed ").await.unwrap();

    let completed = service
        .list(Some(STATUS_COMPLETED), PageRequest::default())
        .await
        .unwrap();

    assert_eq!(completed.len(), 1);
    assert!(completed.iter().all(|app| app.status == STATUS_COMPLETED));

    let all = service.list(None, PageRequest::default()).await.unwrap();
    assert_eq!(all.iter().map(|app| app.id).collect::<Vec<_>>(), vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn test_list_default_page_is_ten() {
    let service = service();
    for i in 0..12 {
        service.create(draft(&i.to_string())).await.unwrap();
    }

    let page = service.list(None, PageRequest::default()).await.unwrap();
    assert_eq!(page.len(), 10);

    let rest = service.list(None, PageRequest::new(10, 10)).await.unwrap();
    assert_eq!(rest.len(), 2);
}

#[tokio::test]
async fn test_delete() {
    let service = service();
    let app = service.create(draft("x")).await.unwrap();

    service.delete(app.id).await.unwrap();
    assert!(matches!(service.get(app.id).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(service.delete(app.id).await, Err(DomainError::NotFound { .. })));
}
