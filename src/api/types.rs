use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::reservation::BookReservationCount;
use crate::domain::{Reservation, commands::ReserveBook, value_objects::BookId};

/// 予約作成リクエスト（POST /reservations）
///
/// 予約する会員はリクエストボディではなく呼び出し元の認証情報から決まる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub book_id: Uuid,
}

impl ReservationRequest {
    pub fn to_command(&self, reserved_at: DateTime<Utc>) -> ReserveBook {
        ReserveBook {
            book_id: BookId::from_uuid(self.book_id),
            reserved_at,
        }
    }
}

/// 予約レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub reservation_id: i64,
    pub member_id: Uuid,
    pub book_id: Uuid,
    pub reserved_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            reservation_id: reservation.reservation_id.value(),
            member_id: reservation.member_id.value(),
            book_id: reservation.book_id.value(),
            reserved_at: reservation.reserved_at,
        }
    }
}

/// 書籍の予約数レスポンス（GET /books/:id/reservations/count）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReservationResponse {
    pub count: u64,
}

impl From<BookReservationCount> for CountReservationResponse {
    fn from(value: BookReservationCount) -> Self {
        Self { count: value.count }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
