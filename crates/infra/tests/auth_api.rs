//! Auth facade tests against a mock backend

use reportdeck_common::SessionStore;
use reportdeck_domain::{LoginRequest, SignupRequest, UserRole};
use reportdeck_infra::{ApiConfig, ApiError, AuthApi};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::empty_session as session;

fn api(server: &MockServer, session: SessionStore) -> AuthApi {
    support::init_tracing();
    AuthApi::new(&ApiConfig::new(server.uri()), session).unwrap()
}

fn auth_body(token: &str) -> serde_json::Value {
    serde_json::json!({
        "token": token,
        "type": "Bearer",
        "id": 1,
        "email": "a@x.com",
        "fullName": "A",
        "role": "ADMIN",
        "phoneNumber": null,
        "domain": null
    })
}

#[tokio::test]
async fn login_establishes_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({"email": "a@x.com", "password": "p"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("t1")))
        .expect(1)
        .mount(&server)
        .await;

    let session = session();
    let api = api(&server, session.clone());

    let response = api
        .login(LoginRequest { email: "a@x.com".into(), password: "p".into() })
        .await
        .unwrap();

    assert_eq!(response.token, "t1");
    assert!(session.is_authenticated());
    assert_eq!(session.current_user().unwrap().role, UserRole::Admin);
    assert!(api.is_authenticated());
}

#[tokio::test]
async fn login_failure_prefers_structured_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Bad credentials"})),
        )
        .mount(&server)
        .await;

    let session = session();
    let err = api(&server, session.clone())
        .login(LoginRequest { email: "a@x.com".into(), password: "wrong".into() })
        .await
        .unwrap_err();

    match err {
        ApiError::Auth(message) => assert_eq!(message, "Bad credentials"),
        other => panic!("expected auth error, got {other:?}"),
    }
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn login_failure_falls_back_to_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("account locked"))
        .mount(&server)
        .await;

    let err = api(&server, session())
        .login(LoginRequest { email: "a@x.com".into(), password: "p".into() })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "account locked");
}

#[tokio::test]
async fn login_failure_without_body_uses_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = api(&server, session())
        .login(LoginRequest { email: "a@x.com".into(), password: "p".into() })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Login failed. Please check your credentials.");
}

#[tokio::test]
async fn login_transport_failure_uses_fixed_message() {
    // Unroutable port: the request never reaches a server.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::new(format!("http://{addr}"));
    let api = AuthApi::new(&config, session()).unwrap();

    let err = api
        .login(LoginRequest { email: "a@x.com".into(), password: "p".into() })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Login failed. Please check your credentials.");
}

#[tokio::test]
async fn signup_uppercases_role_and_establishes_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_json(serde_json::json!({
            "fullName": "A",
            "email": "a@x.com",
            "phoneNumber": "555-0100",
            "domain": "example.org",
            "password": "p",
            "role": "ADMIN"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("t2")))
        .expect(1)
        .mount(&server)
        .await;

    let session = session();
    let api = api(&server, session.clone());

    let request = SignupRequest {
        full_name: "A".into(),
        email: "a@x.com".into(),
        phone_number: Some("555-0100".into()),
        domain: "example.org".into(),
        password: "p".into(),
        role: "admin".into(),
    };
    api.signup(request).await.unwrap();

    assert_eq!(session.token().as_deref(), Some("t2"));
}

#[tokio::test]
async fn signup_failure_uses_signup_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = SignupRequest {
        full_name: "A".into(),
        email: "a@x.com".into(),
        phone_number: None,
        domain: String::new(),
        password: "p".into(),
        role: "user".into(),
    };
    let err = api(&server, session()).signup(request).await.unwrap_err();

    assert_eq!(err.message(), "Signup failed. Please try again.");
}

#[tokio::test]
async fn empty_token_does_not_establish_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("")))
        .mount(&server)
        .await;

    let session = session();
    let api = api(&server, session.clone());
    api.login(LoginRequest { email: "a@x.com".into(), password: "p".into() }).await.unwrap();

    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn logout_delegates_to_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("t1")))
        .mount(&server)
        .await;

    let session = session();
    let api = api(&server, session.clone());
    api.login(LoginRequest { email: "a@x.com".into(), password: "p".into() }).await.unwrap();

    api.logout();
    assert!(!api.is_authenticated());
    assert!(api.current_user().is_none());
    assert!(api.token().is_none());
}
