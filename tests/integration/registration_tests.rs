//! Account registration

use crate::common::{TestBackend, fixtures};
use crate::{assert_err, assert_ok};
use defect_tracker_client::auth::RegisterRequest;
use defect_tracker_client::notifications::NotificationKind;
use defect_tracker_client::{Role, SessionStatus};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: "s3cret-pass".to_string(),
        full_name: "Hana Site".to_string(),
        email: format!("{}@example.com", username),
        role: Role::Engineer,
    }
}

#[tokio::test]
async fn test_register_posts_json_and_keeps_session() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_partial_json(serde_json::json!({
            "username": "hana",
            "role": "engineer",
            "full_name": "Hana Site"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::user_json(11, "hana", "engineer")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    let t = backend.client_at("/login");

    let created = assert_ok!(t.client.auth().register(&request("hana")).await);

    assert_eq!(created.map(|u| u.id), Some(11));
    assert_eq!(t.client.session().status(), SessionStatus::Unauthenticated);
    assert_eq!(backend.stored_token(), None);
    assert_eq!(
        t.client.notifications().list()[0].kind,
        NotificationKind::Success
    );
}

#[tokio::test]
async fn test_register_error_detail_is_verbatim() {
    let backend = TestBackend::start().await;
    backend
        .mount_status(
            "POST",
            "/auth/register",
            400,
            fixtures::detail("Username already registered"),
        )
        .await;
    let t = backend.client_at("/login");

    let err = assert_err!(t.client.auth().register(&request("hana")).await);

    assert!(err.is_validation_error());
    assert_eq!(err.display_message(), "Username already registered");
    assert_eq!(t.client.session().status(), SessionStatus::Unauthenticated);
    let toast = &t.client.notifications().list()[0];
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.message, "Username already registered");
}

#[tokio::test]
async fn test_register_401_does_not_redirect() {
    let backend = TestBackend::start().await;
    backend
        .mount_status("POST", "/auth/register", 401, fixtures::detail("Registration closed"))
        .await;
    let t = backend.client_at("/dashboard");

    let err = assert_err!(t.client.auth().register(&request("ivan")).await);

    assert_eq!(err.display_message(), "Registration closed");
    assert_eq!(t.navigator.history(), vec!["/dashboard"]);
    assert_eq!(t.credentials.clears(), 0);
}
