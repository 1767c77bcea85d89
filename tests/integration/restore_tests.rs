//! Startup restoration

use crate::common::backend::closed_port_url;
use crate::common::{TestBackend, fixtures};
use defect_tracker_client::navigation::Navigator;
use defect_tracker_client::{SessionState, SessionStatus};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_no_token_makes_no_network_call() {
    let backend = TestBackend::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&backend.server)
        .await;
    let t = backend.client();

    let state = t.client.start().await;

    assert_eq!(state, SessionState::Unauthenticated);
    assert_eq!(t.navigator.history(), vec!["/"]);
}

#[tokio::test]
async fn test_valid_token_restores_once() {
    let backend = TestBackend::start().await;
    backend.seed_token("persisted");
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer persisted"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::user_json(5, "erin", "manager")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    let t = backend.client();

    let first = t.client.start().await;
    let second = t.client.start().await;

    assert_eq!(first, second);
    assert_eq!(first.status(), SessionStatus::Authenticated);
    assert_eq!(first.token(), Some("persisted"));
    assert_eq!(first.user().map(|u| u.id), Some(5));
}

#[tokio::test]
async fn test_concurrent_starts_validate_once() {
    let backend = TestBackend::start().await;
    backend.seed_token("persisted");
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::user_json(5, "erin", "manager")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    let t = backend.client();

    let (a, b) = tokio::join!(t.client.start(), t.client.start());

    assert!(a.is_authenticated());
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let backend = TestBackend::start().await;
    backend.seed_token("expired");
    backend
        .mount_status(
            "GET",
            "/users/me",
            401,
            fixtures::detail("Could not validate credentials"),
        )
        .await;
    let t = backend.client();

    let state = t.client.start().await;

    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert_eq!(backend.stored_token(), None);
    assert!(t.credentials.clears() >= 1);
    assert_eq!(t.navigator.current_path(), "/login");
    assert!(t.client.notifications().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_reported() {
    let backend = TestBackend::start().await;
    backend.seed_token("persisted");
    let t = backend.client_for(&closed_port_url(), "/login");

    let state = t.client.start().await;

    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert_eq!(backend.stored_token(), None);
    let toasts = t.client.notifications().list();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Unable to connect to the server");
}

#[tokio::test]
async fn test_restore_transitions_are_observable() {
    let backend = TestBackend::start().await;
    backend.seed_token("persisted");
    backend
        .mount_me("persisted", fixtures::user_json(2, "frank", "observer"))
        .await;
    let t = backend.client();
    let mut transitions = t.client.session().subscribe();

    t.client.start().await;

    let restoring = transitions.recv().await.unwrap();
    assert_eq!(restoring.from, SessionStatus::Unauthenticated);
    assert_eq!(restoring.to, SessionState::Restoring);
    let done = transitions.recv().await.unwrap();
    assert_eq!(done.from, SessionStatus::Restoring);
    assert!(done.to.is_authenticated());
}
