use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use rusty_library_reservation::api::handlers::AppState;
use rusty_library_reservation::api::router::create_router;
use rusty_library_reservation::api::types::*;
use rusty_library_reservation::api::MEMBER_ID_HEADER;
use rusty_library_reservation::domain::value_objects::*;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

use common::TestContext;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// インメモリのアダプターで実際のAPIルーターを組み立てる
fn setup_e2e_app(ctx: &TestContext) -> axum::Router {
    let app_state = Arc::new(AppState {
        service_deps: ctx.deps.clone(),
    });

    create_router(app_state)
}

async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_reservation(member_id: MemberId, book_id: BookId) -> Request<Body> {
    let body = json!({ "book_id": book_id.value() });

    Request::builder()
        .method("POST")
        .uri("/reservations")
        .header("content-type", "application/json")
        .header(MEMBER_ID_HEADER, member_id.value().to_string())
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: String) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_as(uri: &str, member_id: MemberId) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(MEMBER_ID_HEADER, member_id.value().to_string())
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: String) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_e2e_health_check() {
    let ctx = TestContext::new();
    let app = setup_e2e_app(&ctx);

    let response = send(&app, get("/health".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_e2e_full_reservation_flow() {
    // Arrange
    let ctx = TestContext::new();
    let member_id = ctx.register_member("Alice");
    let book_id = ctx.register_book("The Rust Programming Language");
    let app = setup_e2e_app(&ctx);

    // Step 1: 予約作成（POST /reservations）
    let response = send(&app, post_reservation(member_id, book_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: ReservationResponse = read_json(response).await;
    assert_eq!(created.reservation_id, 1);
    assert_eq!(created.member_id, member_id.value());
    assert_eq!(created.book_id, book_id.value());

    // Step 2: 予約詳細取得（GET /reservations/:id）
    let response = send(&app, get(format!("/reservations/{}", created.reservation_id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: ReservationResponse = read_json(response).await;
    assert_eq!(fetched, created);

    // Step 3: 自分の予約一覧（GET /reservations）
    let response = send(&app, get_as("/reservations", member_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mine: Vec<ReservationResponse> = read_json(response).await;
    assert_eq!(mine, vec![created.clone()]);

    // Step 4: 予約数（GET /books/:id/reservations/count）
    let response = send(
        &app,
        get(format!("/books/{}/reservations/count", book_id.value())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let count: CountReservationResponse = read_json(response).await;
    assert_eq!(count.count, 1);

    // Step 5: 取り消し（DELETE /reservations/:id）
    let response = send(
        &app,
        delete(format!("/reservations/{}", created.reservation_id)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let deleted: ReservationResponse = read_json(response).await;
    assert_eq!(deleted, created);

    // Step 6: 取り消し後は404、予約数は0
    let response = send(&app, get(format!("/reservations/{}", created.reservation_id))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        get(format!("/books/{}/reservations/count", book_id.value())),
    )
    .await;
    let count: CountReservationResponse = read_json(response).await;
    assert_eq!(count.count, 0);
}

// ============================================================================
// E2Eテスト: エラー系
// ============================================================================

#[tokio::test]
async fn test_e2e_duplicate_reservation_is_conflict() {
    let ctx = TestContext::new();
    let member_id = ctx.register_member("Alice");
    let book_id = ctx.register_book("Programming Rust");
    let app = setup_e2e_app(&ctx);

    let response = send(&app, post_reservation(member_id, book_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, post_reservation(member_id, book_id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "RESERVATION_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_e2e_unknown_member_is_not_found() {
    let ctx = TestContext::new();
    let book_id = ctx.register_book("Rust in Action");
    let app = setup_e2e_app(&ctx);

    let response = send(&app, post_reservation(MemberId::new(), book_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "MEMBER_NOT_FOUND");
    assert!(ctx.reservation_repository.is_empty());
}

#[tokio::test]
async fn test_e2e_unknown_book_is_not_found() {
    let ctx = TestContext::new();
    let member_id = ctx.register_member("Alice");
    let app = setup_e2e_app(&ctx);

    let response = send(&app, post_reservation(member_id, BookId::new())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "BOOK_NOT_FOUND");

    let response = send(
        &app,
        get(format!("/books/{}/reservations/count", BookId::new().value())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_e2e_unknown_reservation_is_not_found() {
    let ctx = TestContext::new();
    let app = setup_e2e_app(&ctx);

    let response = send(&app, get("/reservations/42".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "RESERVATION_NOT_FOUND");

    let response = send(&app, delete("/reservations/42".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_e2e_missing_member_header_is_unauthorized() {
    let ctx = TestContext::new();
    let book_id = ctx.register_book("Rust for Rustaceans");
    let app = setup_e2e_app(&ctx);

    let request = Request::builder()
        .method("POST")
        .uri("/reservations")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "book_id": book_id.value() }).to_string(),
        ))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_e2e_malformed_member_header_is_unauthorized() {
    let ctx = TestContext::new();
    let app = setup_e2e_app(&ctx);

    let request = Request::builder()
        .method("GET")
        .uri("/reservations")
        .header(MEMBER_ID_HEADER, "not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_e2e_list_only_returns_callers_reservations() {
    let ctx = TestContext::new();
    let alice = ctx.register_member("Alice");
    let bob = ctx.register_member("Bob");
    let book_a = ctx.register_book("Book A");
    let book_b = ctx.register_book("Book B");
    let app = setup_e2e_app(&ctx);

    send(&app, post_reservation(alice, book_a)).await;
    send(&app, post_reservation(alice, book_b)).await;
    send(&app, post_reservation(bob, book_a)).await;

    let response = send(&app, get_as("/reservations", alice)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mine: Vec<ReservationResponse> = read_json(response).await;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.member_id == alice.value()));

    let response = send(&app, get_as("/reservations", MemberId::new())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_e2e_non_numeric_reservation_id_is_json_bad_request() {
    let ctx = TestContext::new();
    let app = setup_e2e_app(&ctx);

    let response = send(&app, get("/reservations/abc".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_PATH");
    assert!(!error.message.is_empty());

    let response = send(&app, delete("/reservations/abc".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_PATH");
}

#[tokio::test]
async fn test_e2e_malformed_book_id_is_json_bad_request() {
    let ctx = TestContext::new();
    let app = setup_e2e_app(&ctx);

    let response = send(
        &app,
        get("/books/not-a-uuid/reservations/count".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "INVALID_PATH");
}
