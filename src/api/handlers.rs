use crate::application::reservation::{
    ServiceDependencies, add_reservation as execute_add_reservation,
    count_book_reservations as execute_count_book_reservations,
    delete_reservation as execute_delete_reservation, get_reservation as execute_get_reservation,
    get_reservations_by_member as execute_get_reservations_by_member,
};
use crate::domain::value_objects::{BookId, ReservationId};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    caller::AuthenticatedCaller,
    error::ApiError,
    path::ApiPath,
    types::{CountReservationResponse, ReservationRequest, ReservationResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers
// ============================================================================

/// POST /reservations - 書籍を予約
///
/// 強制されるビジネスルール:
/// - 会員が存在すること
/// - 書籍が存在すること
/// - 同じ書籍を既に予約していないこと
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Json(req): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let cmd = req.to_command(chrono::Utc::now());

    let reservation = execute_add_reservation(&state.service_deps, &caller, cmd).await?;

    Ok((StatusCode::CREATED, Json(ReservationResponse::from(reservation))))
}

/// DELETE /reservations/:id - 予約を取り消す
///
/// 削除前の予約内容を返す。
pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    ApiPath(reservation_id): ApiPath<i64>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation_id = ReservationId::from_i64(reservation_id);

    let reservation = execute_delete_reservation(&state.service_deps, reservation_id).await?;

    Ok(Json(ReservationResponse::from(reservation)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /reservations/:id - 予約詳細をIDで取得
pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    ApiPath(reservation_id): ApiPath<i64>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation_id = ReservationId::from_i64(reservation_id);

    let reservation = execute_get_reservation(&state.service_deps, reservation_id).await?;

    Ok(Json(ReservationResponse::from(reservation)))
}

/// GET /reservations - 呼び出し元の会員の予約一覧
pub async fn list_my_reservations(
    State(state): State<Arc<AppState>>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let reservations = execute_get_reservations_by_member(&state.service_deps, &caller).await?;

    Ok(Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    ))
}

/// GET /books/:id/reservations/count - 書籍の予約数
pub async fn count_book_reservations(
    State(state): State<Arc<AppState>>,
    ApiPath(book_id): ApiPath<Uuid>,
) -> Result<Json<CountReservationResponse>, ApiError> {
    let book_id = BookId::from_uuid(book_id);

    let count = execute_count_book_reservations(&state.service_deps, book_id).await?;

    Ok(Json(CountReservationResponse::from(count)))
}
