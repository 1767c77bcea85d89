//! Route gating through a live client

use crate::assert_ok;
use crate::common::{TestBackend, fixtures};
use defect_tracker_client::Resource;
use defect_tracker_client::navigation::{Navigator, RouteDecision};

#[tokio::test]
async fn test_anonymous_session_is_sent_to_login() {
    let backend = TestBackend::start().await;
    let t = backend.client();
    t.client.start().await;

    assert_eq!(
        t.client.routes().navigate("/projects"),
        RouteDecision::Redirect(Resource::Entry)
    );
    assert_eq!(t.navigator.current_path(), "/login");
    assert!(t.client.routes().menu().is_empty());
}

#[tokio::test]
async fn test_engineer_navigation() {
    let backend = TestBackend::start().await;
    backend
        .mount_login("lee", "pw", "tok", fixtures::user_json(4, "lee", "engineer"))
        .await;
    let t = backend.client_at("/login");
    assert_ok!(t.client.auth().login("lee", "pw").await);
    let routes = t.client.routes();

    assert_eq!(routes.navigate("/defects"), RouteDecision::Allow(Resource::Defects));
    assert_eq!(routes.navigate("/users"), RouteDecision::Denied(Resource::Users));
    assert_eq!(t.navigator.current_path(), "/dashboard");
    assert_eq!(routes.resolve("/login"), RouteDecision::Redirect(Resource::Dashboard));
    assert_eq!(routes.resolve("/nowhere"), RouteDecision::NotFound);
    assert!(!routes.menu().contains(&Resource::Users));
}

#[tokio::test]
async fn test_manager_menu_includes_users() {
    let backend = TestBackend::start().await;
    backend.seed_token("tok");
    backend
        .mount_me("tok", fixtures::user_json(6, "max", "manager"))
        .await;
    let t = backend.client();
    t.client.start().await;

    let menu = t.client.routes().menu();
    assert_eq!(
        menu,
        vec![
            Resource::Dashboard,
            Resource::Projects,
            Resource::Defects,
            Resource::Reports,
            Resource::Users,
            Resource::Profile,
        ]
    );
}
