use std::sync::{Arc, Mutex};
use std::time::Duration;

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use secrecy::Secret;

use keygate_adapters::{
    Argon2SecretHasher, ChannelEventPublisher, InMemoryCredentialStore, JwtConfig, JwtTokenIssuer,
};
use keygate_auth_service::AuthService;
use keygate_core::IdentityEvent;

pub const TEST_JWT_SECRET: &str = "integration-test-signing-secret";

/// One identity service on an ephemeral port with in-memory adapters, plus
/// a capture of every identity event it publishes.
pub struct TestApp {
    pub address: String,
    pub http: reqwest::Client,
    events: Arc<Mutex<Vec<IdentityEvent>>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let credential_store = InMemoryCredentialStore::new();
        let secret_hasher = Argon2SecretHasher::new();
        let token_issuer = JwtTokenIssuer::new(JwtConfig {
            secret: Secret::from(TEST_JWT_SECRET.to_string()),
            ttl_seconds: 600,
        });
        let (event_publisher, mut receiver) = ChannelEventPublisher::new();

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let _capture = tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                sink.lock().unwrap().push(event);
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = AuthService::new(
            credential_store,
            secret_hasher,
            token_issuer,
            event_publisher,
        );
        let _server = tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http: reqwest::Client::new(),
            events,
        }
    }

    pub fn recorded_events(&self) -> Vec<IdentityEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Event delivery is asynchronous relative to the triggering request, so
    /// assertions on events poll briefly instead of reading immediately.
    pub async fn wait_for_events(&self, count: usize) -> Vec<IdentityEvent> {
        for _ in 0..100 {
            let snapshot = self.recorded_events();
            if snapshot.len() >= count {
                return snapshot;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "expected at least {count} events, saw {:?}",
            self.recorded_events()
        );
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> reqwest::Response {
        self.http
            .post(format!("{}/register", self.address))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "displayName": display_name,
            }))
            .send()
            .await
            .expect("register request failed")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.http
            .post(format!("{}/login", self.address))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed")
    }

    pub async fn refresh(&self, token: &str) -> reqwest::Response {
        self.http
            .post(format!("{}/refresh", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("refresh request failed")
    }

    pub async fn get_profile(&self, token: &str) -> reqwest::Response {
        self.http
            .get(format!("{}/profile", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("get profile request failed")
    }

    pub async fn update_profile(&self, token: &str, display_name: &str) -> reqwest::Response {
        self.http
            .put(format!("{}/profile", self.address))
            .bearer_auth(token)
            .json(&serde_json::json!({ "displayName": display_name }))
            .send()
            .await
            .expect("update profile request failed")
    }
}

pub fn random_email() -> String {
    SafeEmail().fake()
}

/// Pull the token string out of a successful issuance response.
pub async fn token_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("token body was not JSON");
    body["token"]
        .as_str()
        .expect("token field missing")
        .to_string()
}
