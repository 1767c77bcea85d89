//! Mock backend and client wiring

use super::store::CountingStore;
use defect_tracker_client::auth::credential::{CredentialStore, FileCredentialStore};
use defect_tracker_client::gateway::ReqwestTransport;
use defect_tracker_client::navigation::HistoryNavigator;
use defect_tracker_client::{ConfigBuilder, DefectClient};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock server plus a credential directory that outlives client instances
pub struct TestBackend {
    pub server: MockServer,
    pub dir: TempDir,
}

/// One client instance and the collaborators a test wants to inspect
pub struct TestClient {
    pub client: DefectClient,
    pub credentials: Arc<CountingStore>,
    pub navigator: Arc<HistoryNavigator>,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            dir: TempDir::new().expect("temp dir"),
        }
    }

    /// Persist a token as if a previous run had signed in
    pub fn seed_token(&self, token: &str) {
        FileCredentialStore::new(self.dir.path())
            .save(token)
            .expect("seed token");
    }

    pub fn stored_token(&self) -> Option<String> {
        FileCredentialStore::new(self.dir.path())
            .load()
            .expect("load token")
    }

    /// A fresh client over the shared credential directory, as after a restart
    pub fn client(&self) -> TestClient {
        self.client_at("/")
    }

    pub fn client_at(&self, start: &str) -> TestClient {
        self.client_for(&self.server.uri(), start)
    }

    /// Client pointed at an arbitrary base URL
    pub fn client_for(&self, api_url: &str, start: &str) -> TestClient {
        let config = ConfigBuilder::new()
            .api_url(api_url)
            .credential_dir(self.dir.path())
            .timeout_secs(5)
            .try_build()
            .expect("valid config");
        let transport = ReqwestTransport::new(&config.api_url, config.timeout(), &config.user_agent)
            .expect("transport");
        let credentials = Arc::new(CountingStore::new(self.dir.path()));
        let navigator = Arc::new(HistoryNavigator::new(start));
        let client = DefectClient::with_parts(
            config,
            credentials.clone(),
            navigator.clone(),
            Arc::new(transport),
        )
        .expect("client");

        TestClient {
            client,
            credentials,
            navigator,
        }
    }

    /// Token issuance for one username/password pair
    pub async fn mount_login(&self, username: &str, password: &str, token: &str, user: Value) {
        Mock::given(method("POST"))
            .and(path("/auth/token"))
            .and(body_string_contains(format!("username={}", username)))
            .and(body_string_contains(format!("password={}", password)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": token, "token_type": "bearer"})),
            )
            .mount(&self.server)
            .await;
        self.mount_me(token, user).await;
    }

    /// Identity lookup answering only for `token`
    pub async fn mount_me(&self, token: &str, user: Value) {
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    /// Any request to `route` answers with `status` and `body`
    pub async fn mount_status(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

/// Base URL of a port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
