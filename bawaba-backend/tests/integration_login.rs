use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bawaba_backend::handlers::auth::login::login;
use bawaba_backend::messages::{Locale, MessageCatalog};
use bawaba_backend::state::AppState;
use bawaba_db::{create_pool, DbConnectionConfig, StoreError, UserRecord, UserStore};

async fn seeded_state(locale: Locale) -> Arc<AppState> {
    // In-memory sqlite pool with the users schema from migrations
    let config = DbConnectionConfig::new("sqlite::memory:");
    let pool = create_pool(&config).await.expect("create pool");
    bawaba_migrations::sqlite_migrator()
        .run(&pool)
        .await
        .expect("migrate");

    sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind("alice")
        .bind("secret1")
        .execute(&pool)
        .await
        .expect("seed alice");

    Arc::new(AppState::from_pool(pool, MessageCatalog::new(locale)))
}

async fn call_login(state: Arc<AppState>, body: &str) -> Response {
    match login(Extension(state), Bytes::from(body.to_string())).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn correct_credentials_succeed() {
    let state = seeded_state(Locale::English).await;

    let resp = call_login(state, r#"{"username":"alice","password":"secret1"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "login succeeded");
    assert_eq!(body["user"]["username"], "alice");
    // The stored password must never be echoed back.
    assert!(body["user"].get("password").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let state = seeded_state(Locale::English).await;

    let resp = call_login(state, r#"{"username":"alice","password":"wrong"}"#).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "incorrect password");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn unknown_username_is_unauthorized() {
    let state = seeded_state(Locale::English).await;

    let resp = call_login(state, r#"{"username":"bob","password":"x"}"#).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "invalid username");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn missing_or_empty_fields_are_bad_requests() {
    let state = seeded_state(Locale::English).await;

    for body in [
        r#"{"username":"","password":"x"}"#,
        r#"{"username":"alice","password":""}"#,
        r#"{"username":"alice"}"#,
        r#"{"password":"secret1"}"#,
        r#"{}"#,
    ] {
        let resp = call_login(state.clone(), body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let json = body_json(resp).await;
        assert_eq!(json["message"], "username and password are required");
        assert!(json.get("user").is_none());
    }
}

#[tokio::test]
async fn malformed_body_is_a_bad_request_not_a_crash() {
    let state = seeded_state(Locale::English).await;

    // The array case carries the seeded credentials positionally; it must
    // still be rejected before any lookup happens.
    for body in [
        "not json at all",
        r#"["alice","secret1"]"#,
        "[1,2,3]",
        "null",
        "",
    ] {
        let resp = call_login(state.clone(), body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body:?}");

        let json = body_json(resp).await;
        assert_eq!(json["message"], "username and password are required");
    }
}

#[tokio::test]
async fn login_is_idempotent() {
    let state = seeded_state(Locale::English).await;

    for _ in 0..3 {
        let resp = call_login(state.clone(), r#"{"username":"alice","password":"secret1"}"#).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "login succeeded");
    }

    // A failure in between does not change subsequent outcomes.
    let resp = call_login(state.clone(), r#"{"username":"alice","password":"wrong"}"#).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = call_login(state, r#"{"username":"alice","password":"secret1"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn arabic_catalog_is_served_verbatim() {
    let state = seeded_state(Locale::Arabic).await;

    let resp = call_login(state.clone(), r#"{"username":"alice","password":"wrong"}"#).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "كلمة المرور غير صحيحة");

    let resp = call_login(state, r#"{"username":"alice","password":"secret1"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "تم تسجيل الدخول بنجاح");
    assert_eq!(body["user"]["username"], "alice");
}

struct FailingStore;

#[async_trait::async_trait]
impl UserStore for FailingStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("store offline".into()))
    }
}

#[tokio::test]
async fn store_failure_is_a_server_error_not_unauthorized() {
    let state = Arc::new(AppState::new(
        Arc::new(FailingStore),
        MessageCatalog::new(Locale::English),
    ));

    let resp = call_login(state.clone(), r#"{"username":"alice","password":"secret1"}"#).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Validation failures never reach the store, so they still answer 400.
    let resp = call_login(state, r#"{"username":"","password":""}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
