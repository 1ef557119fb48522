use secrecy::Secret;

use keygate_adapters::tokens::generate_token;
use keygate_core::{Email, IdentityEvent};

use crate::helpers::{TEST_JWT_SECRET, TestApp, random_email, token_of};

#[tokio::test]
async fn register_profile_update_refresh_lifecycle() {
    let app = TestApp::spawn().await;
    let email = random_email();

    // Register issues a token for the new subject.
    let response = app.register(&email, "pw123456", "Ann").await;
    assert_eq!(response.status(), 201);
    let token = token_of(response).await;

    // The token resolves to the freshly created profile.
    let response = app.get_profile(&token).await;
    assert_eq!(response.status(), 200);
    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["email"], email.to_lowercase());
    assert_eq!(profile["displayName"], "Ann");
    let user_id = profile["id"].as_str().unwrap().to_string();

    // Update the display name and observe the new projection.
    let response = app.update_profile(&token, "Annie").await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["displayName"], "Annie");
    assert_eq!(updated["id"].as_str().unwrap(), user_id);

    // The original token still refreshes into a working replacement.
    let response = app.refresh(&token).await;
    assert_eq!(response.status(), 200);
    let refreshed = token_of(response).await;
    let response = app.get_profile(&refreshed).await;
    assert_eq!(response.status(), 200);

    // Exactly one event per mutation, in order.
    let events = app.wait_for_events(2).await;
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], IdentityEvent::UserCreated { .. }));
    match &events[1] {
        IdentityEvent::UserUpdated { updated_fields, .. } => {
            assert_eq!(updated_fields, &vec!["displayName".to_string()]);
        }
        other => panic!("expected UserUpdated, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let app = TestApp::spawn().await;
    let email = random_email();

    assert_eq!(app.register(&email, "pw123456", "Ann").await.status(), 201);

    let response = app.register(&email, "other-password", "Impostor").await;
    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "identity already exists");
}

#[tokio::test]
async fn login_distinguishes_unknown_email_from_wrong_password() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "pw123456", "Ann").await;

    let response = app.login(&email, "pw123456").await;
    assert_eq!(response.status(), 200);
    let token = token_of(response).await;
    assert_eq!(app.get_profile(&token).await.status(), 200);

    let response = app.login(&email, "wrong-password").await;
    assert_eq!(response.status(), 401);

    let response = app.login(&random_email(), "pw123456").await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn login_and_reads_emit_no_events() {
    let app = TestApp::spawn().await;
    let email = random_email();

    let token = token_of(app.register(&email, "pw123456", "Ann").await).await;
    let events = app.wait_for_events(1).await;
    assert_eq!(events.len(), 1);

    app.login(&email, "pw123456").await;
    app.get_profile(&token).await;
    app.get_profile(&token).await;

    assert_eq!(app.recorded_events().len(), 1);
}

#[tokio::test]
async fn repeated_profile_reads_are_identical() {
    let app = TestApp::spawn().await;
    let token = token_of(app.register(&random_email(), "pw123456", "Ann").await).await;

    let first: serde_json::Value = app.get_profile(&token).await.json().await.unwrap();
    let second: serde_json::Value = app.get_profile(&token).await.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn expired_token_is_rejected_everywhere() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "pw123456", "Ann").await;

    let subject = Email::try_from(Secret::from(email)).unwrap();
    let stale = generate_token(&subject, -60, TEST_JWT_SECRET.as_bytes()).unwrap();

    assert_eq!(app.get_profile(&stale.token).await.status(), 401);
    assert_eq!(app.refresh(&stale.token).await.status(), 401);
    assert_eq!(app.update_profile(&stale.token, "Annie").await.status(), 401);
}

#[tokio::test]
async fn token_of_a_never_registered_subject_cannot_refresh() {
    let app = TestApp::spawn().await;

    // Correctly signed, unexpired, but the subject does not resolve.
    let subject = Email::try_from(Secret::from(random_email())).unwrap();
    let orphaned = generate_token(&subject, 600, TEST_JWT_SECRET.as_bytes()).unwrap();

    assert_eq!(app.refresh(&orphaned.token).await.status(), 404);
    assert_eq!(app.get_profile(&orphaned.token).await.status(), 404);
}

#[tokio::test]
async fn missing_or_garbage_bearer_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .http
        .get(format!("{}/profile", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    assert_eq!(app.get_profile("not-a-token").await.status(), 401);
    assert_eq!(app.refresh("not-a-token").await.status(), 401);
}

#[tokio::test]
async fn malformed_registration_input_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.register("not-an-email", "pw123456", "Ann").await;
    assert_eq!(response.status(), 400);

    let response = app.register(&random_email(), "short", "Ann").await;
    assert_eq!(response.status(), 400);

    let response = app.register(&random_email(), "pw123456", "   ").await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "display name must not be blank");
}

#[tokio::test]
async fn blank_display_name_update_is_rejected_and_not_persisted() {
    let app = TestApp::spawn().await;
    let token = token_of(app.register(&random_email(), "pw123456", "Ann").await).await;

    assert_eq!(app.update_profile(&token, "  ").await.status(), 400);

    let profile: serde_json::Value = app.get_profile(&token).await.json().await.unwrap();
    assert_eq!(profile["displayName"], "Ann");
}

#[tokio::test]
async fn email_comparison_is_case_insensitive_end_to_end() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email.to_uppercase(), "pw123456", "Ann").await;

    let response = app.login(&email.to_lowercase(), "pw123456").await;
    assert_eq!(response.status(), 200);

    let response = app.register(&email.to_lowercase(), "pw123456", "Dup").await;
    assert_eq!(response.status(), 409);
}
