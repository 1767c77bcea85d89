//! Profile and user administration

use crate::common::{TestBackend, fixtures};
use crate::{assert_err, assert_ok};
use defect_tracker_client::auth::UserUpdate;
use defect_tracker_client::{Action, ClientError, Role};
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn signed_in_as(backend: &TestBackend, role: &str) -> crate::common::backend::TestClient {
    backend
        .mount_login("jo", "pw", "tok", fixtures::user_json(1, "jo", role))
        .await;
    let t = backend.client_at("/login");
    assert_ok!(t.client.auth().login("jo", "pw").await);
    t
}

#[tokio::test]
async fn test_profile_update_replaces_snapshot() {
    let backend = TestBackend::start().await;
    let t = signed_in_as(&backend, "engineer").await;
    let mut updated = fixtures::user_json(1, "jo", "engineer");
    updated["full_name"] = serde_json::json!("Jo Renamed");
    Mock::given(method("PUT"))
        .and(path("/users/me"))
        .and(body_json(serde_json::json!({"full_name": "Jo Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&backend.server)
        .await;

    let update = UserUpdate {
        full_name: Some("Jo Renamed".to_string()),
        ..Default::default()
    };
    assert_ok!(t.client.auth().update_profile(&update).await);

    let user = t.client.session().current_user().unwrap();
    assert_eq!(user.display_name(), "Jo Renamed");
    assert_eq!(t.client.session().token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn test_manager_lists_but_cannot_delete() {
    let backend = TestBackend::start().await;
    let t = signed_in_as(&backend, "manager").await;
    backend
        .mount_status(
            "GET",
            "/users/",
            200,
            serde_json::json!([
                fixtures::user_json(1, "jo", "manager"),
                fixtures::user_json(2, "kim", "observer")
            ]),
        )
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&backend.server)
        .await;

    let users = assert_ok!(t.client.auth().list_users().await);
    assert_eq!(users.len(), 2);

    let err = assert_err!(t.client.auth().delete_user(2).await);
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert!(!t.client.auth().can_perform(Action::DeleteUser));
}

#[tokio::test]
async fn test_observer_cannot_list_users() {
    let backend = TestBackend::start().await;
    let t = signed_in_as(&backend, "observer").await;
    Mock::given(any())
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;

    let err = assert_err!(t.client.auth().list_users().await);
    assert!(matches!(err, ClientError::Forbidden(_)));
}

#[tokio::test]
async fn test_admin_role_change_and_delete() {
    let backend = TestBackend::start().await;
    let t = signed_in_as(&backend, "admin").await;
    Mock::given(method("PUT"))
        .and(path("/users/2/role"))
        .and(body_json(serde_json::json!({"role": "manager"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::user_json(2, "kim", "manager")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let changed = assert_ok!(t.client.auth().change_user_role(2, Role::Manager).await);
    assert_eq!(changed.role, Role::Manager);
    assert_eq!(t.client.session().current_user().unwrap().role, Role::Admin);

    assert_ok!(t.client.auth().delete_user(3).await);
}
