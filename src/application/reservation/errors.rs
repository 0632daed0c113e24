use thiserror::Error;

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ReservationApplicationError {
    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// 書籍が存在しない
    #[error("Book not found")]
    BookNotFound,

    /// 予約が見つからない
    #[error("Reservation not found")]
    ReservationNotFound,

    /// 同じ会員・書籍の予約が既にある
    #[error("Reservation already exists for this member and book")]
    ReservationAlreadyExists,

    /// ReservationRepositoryのエラー
    #[error("Reservation repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberServiceのエラー
    #[error("Member service error")]
    MemberServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BookServiceのエラー
    #[error("Book service error")]
    BookServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ReservationApplicationError>;
