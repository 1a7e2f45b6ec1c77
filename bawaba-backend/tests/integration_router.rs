use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

use bawaba_backend::build_router;
use bawaba_backend::messages::{Locale, MessageCatalog};
use bawaba_backend::state::AppState;
use bawaba_db::{create_pool, DbConnectionConfig};

async fn test_router() -> axum::Router {
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

    let state = Arc::new(AppState::from_pool(
        pool,
        MessageCatalog::new(Locale::English),
    ));
    build_router(state)
}

fn assert_cors_headers(resp: &Response) {
    let headers = resp.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "*",
        "allow-origin"
    );
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        "POST",
        "allow-methods"
    );
    assert_eq!(
        headers.get("access-control-max-age").unwrap(),
        "3600",
        "max-age"
    );
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        "Content-Type, Access-Control-Allow-Headers, Authorization, X-Requested-With",
        "allow-headers"
    );
}

fn post_login(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn successful_login_over_the_router() {
    let app = test_router().await;

    let resp = app
        .oneshot(post_login(r#"{"username":"alice","password":"secret1"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors_headers(&resp);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json; charset=UTF-8"
    );

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "login succeeded");
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn every_branch_carries_the_cors_headers() {
    // 401 branch
    let resp = test_router()
        .await
        .oneshot(post_login(r#"{"username":"bob","password":"x"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_cors_headers(&resp);

    // 400 branch
    let resp = test_router()
        .await
        .oneshot(post_login(r#"{"username":"","password":""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(&resp);

    // Wrong method on the login route
    let resp = test_router()
        .await
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&resp);

    // Unknown path
    let resp = test_router()
        .await
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_cors_headers(&resp);
}

#[tokio::test]
async fn health_and_ready_endpoints() {
    let app = test_router().await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors_headers(&resp);

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
