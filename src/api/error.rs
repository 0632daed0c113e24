use crate::application::reservation::ReservationApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(ReservationApplicationError);

impl From<ReservationApplicationError> for ApiError {
    fn from(err: ReservationApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 404 Not Found - 参照先が存在しない
            ReservationApplicationError::MemberNotFound => {
                (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND", "Member not found")
            }
            ReservationApplicationError::BookNotFound => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", "Book not found")
            }
            ReservationApplicationError::ReservationNotFound => (
                StatusCode::NOT_FOUND,
                "RESERVATION_NOT_FOUND",
                "Reservation not found",
            ),

            // 409 Conflict - 重複予約
            ReservationApplicationError::ReservationAlreadyExists => (
                StatusCode::CONFLICT,
                "RESERVATION_ALREADY_EXISTS",
                "Reservation already exists for this member and book",
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ReservationApplicationError::RepositoryError(ref e) => {
                tracing::error!("Reservation repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access reservations",
                )
            }
            ReservationApplicationError::MemberServiceError(ref e) => {
                tracing::error!("Member service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEMBER_SERVICE_ERROR",
                    "Member service error",
                )
            }
            ReservationApplicationError::BookServiceError(ref e) => {
                tracing::error!("Book service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOK_SERVICE_ERROR",
                    "Book service error",
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
