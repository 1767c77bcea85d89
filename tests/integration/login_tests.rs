//! Login and logout round trips

use crate::common::backend::closed_port_url;
use crate::common::{TestBackend, fixtures};
use crate::{assert_err, assert_ok};
use defect_tracker_client::navigation::Navigator;
use defect_tracker_client::notifications::NotificationKind;
use defect_tracker_client::{ClientError, Role, SessionStatus};

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let backend = TestBackend::start().await;
    backend
        .mount_login("alice", "pw1", "issued-token", fixtures::user_json(1, "alice", "engineer"))
        .await;
    let t = backend.client_at("/login");
    t.client.start().await;

    let user = assert_ok!(t.client.auth().login("alice", "pw1").await);

    assert_eq!(user.role, Role::Engineer);
    assert_eq!(backend.stored_token().as_deref(), Some("issued-token"));
    assert_eq!(t.credentials.saves(), 1);
    assert_eq!(t.client.session().token().as_deref(), Some("issued-token"));
    assert_eq!(t.client.session().current_user(), Some(user));
    assert_eq!(t.navigator.current_path(), "/dashboard");

    let toasts = t.client.notifications().list();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Success);
}

#[tokio::test]
async fn test_logout_clears_token_and_session() {
    let backend = TestBackend::start().await;
    backend
        .mount_login("alice", "pw1", "issued-token", fixtures::user_json(1, "alice", "engineer"))
        .await;
    let t = backend.client_at("/login");
    assert_ok!(t.client.auth().login("alice", "pw1").await);

    t.client.auth().logout().await;

    assert_eq!(backend.stored_token(), None);
    assert_eq!(t.client.session().status(), SessionStatus::Unauthenticated);
    assert_eq!(t.navigator.current_path(), "/login");
}

#[tokio::test]
async fn test_login_survives_restart() {
    let backend = TestBackend::start().await;
    backend
        .mount_login("alice", "pw1", "issued-token", fixtures::user_json(1, "alice", "engineer"))
        .await;
    {
        let first = backend.client_at("/login");
        assert_ok!(first.client.auth().login("alice", "pw1").await);
    }

    let second = backend.client();
    let state = second.client.start().await;

    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
}

#[tokio::test]
async fn test_bad_credentials_surface_detail() {
    let backend = TestBackend::start().await;
    backend
        .mount_status(
            "POST",
            "/auth/token",
            401,
            fixtures::detail("Incorrect username or password"),
        )
        .await;
    let t = backend.client_at("/login");

    let err = assert_err!(t.client.auth().login("alice", "nope").await);

    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(err.display_message(), "Incorrect username or password");
    assert_eq!(t.client.session().status(), SessionStatus::Unauthenticated);
    assert_eq!(backend.stored_token(), None);
    assert_eq!(t.credentials.clears(), 0);
    assert_eq!(t.navigator.history(), vec!["/login"]);
    assert_eq!(
        t.client.notifications().list()[0].message,
        "Incorrect username or password"
    );
}

#[tokio::test]
async fn test_malformed_input_joins_validation_messages() {
    let backend = TestBackend::start().await;
    backend
        .mount_status(
            "POST",
            "/auth/token",
            422,
            fixtures::validation_errors(&["field required", "string too short"]),
        )
        .await;
    let t = backend.client_at("/login");

    let err = assert_err!(t.client.auth().login("", "").await);

    assert!(err.is_validation_error());
    assert_eq!(err.display_message(), "field required; string too short");
}

#[tokio::test]
async fn test_unreachable_backend_reports_connection() {
    let backend = TestBackend::start().await;
    let t = backend.client_for(&closed_port_url(), "/login");

    let err = assert_err!(t.client.auth().login("alice", "pw1").await);

    assert!(err.is_connection_error());
    assert_eq!(err.display_message(), "Unable to connect to the server");
    assert_eq!(t.client.session().status(), SessionStatus::Unauthenticated);
}
