use crate::domain::{self, Book, CallerIdentity, Member, Reservation, commands::ReserveBook};
use crate::domain::value_objects::{BookId, MemberId, ReservationId};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{ReservationApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、各操作の関数に明示的に渡される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub reservation_repository: Arc<dyn ReservationRepository>,
    pub member_service: Arc<dyn MemberService>,
    pub book_service: Arc<dyn BookService>,
}

/// 書籍ごとの予約数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookReservationCount {
    pub book_id: BookId,
    pub count: u64,
}

/// 会員を解決するヘルパー関数
///
/// add_reservation, get_reservations_by_memberで共通利用される。
async fn load_member(
    member_service: &Arc<dyn MemberService>,
    member_id: MemberId,
) -> Result<Member> {
    member_service
        .find_member_by_id(member_id)
        .await
        .map_err(ReservationApplicationError::MemberServiceError)?
        .ok_or(ReservationApplicationError::MemberNotFound)
}

/// 書籍を解決するヘルパー関数
async fn load_book(book_service: &Arc<dyn BookService>, book_id: BookId) -> Result<Book> {
    book_service
        .find_book_by_id(book_id)
        .await
        .map_err(ReservationApplicationError::BookServiceError)?
        .ok_or(ReservationApplicationError::BookNotFound)
}

/// 予約を取得するヘルパー関数
async fn load_reservation(
    repository: &Arc<dyn ReservationRepository>,
    reservation_id: ReservationId,
) -> Result<Reservation> {
    repository
        .find_by_id(reservation_id)
        .await
        .map_err(ReservationApplicationError::RepositoryError)?
        .ok_or(ReservationApplicationError::ReservationNotFound)
}

/// 書籍を予約する
///
/// ビジネスルール：
/// - 会員が存在すること
/// - 書籍が存在すること
/// - 同じ会員が同じ書籍を既に予約していないこと
///
/// 別の書籍であれば同じ会員が何冊でも予約できる。
///
/// # 一貫性保証
///
/// 事前の存在確認は早期に失敗させるためのもの。
/// 並行リクエストによる重複はストアの一意性制約で防ぎ、
/// `SaveOutcome::AlreadyExists`も`ReservationAlreadyExists`として扱う。
///
/// # 戻り値
/// ストアが採番したIDを持つ予約
pub async fn add_reservation(
    deps: &ServiceDependencies,
    caller: &CallerIdentity,
    cmd: ReserveBook,
) -> Result<Reservation> {
    // 1. 会員・書籍の解決
    let member = load_member(&deps.member_service, caller.member_id()).await?;
    let book = load_book(&deps.book_service, cmd.book_id).await?;

    // 2. 重複予約の確認
    let exists = deps
        .reservation_repository
        .exists_by_member_and_book(member.member_id, book.book_id)
        .await
        .map_err(ReservationApplicationError::RepositoryError)?;

    if exists {
        tracing::debug!(
            member_id = %member.member_id,
            book_id = %book.book_id,
            "Duplicate reservation rejected"
        );
        return Err(ReservationApplicationError::ReservationAlreadyExists);
    }

    // 3. ドメイン層の純粋関数を呼び出し
    let new_reservation = domain::reserve_book(&member, &book, cmd.reserved_at);

    // 4. 保存（一意性制約違反は重複として扱う）
    let outcome = deps
        .reservation_repository
        .save(new_reservation)
        .await
        .map_err(ReservationApplicationError::RepositoryError)?;

    match outcome {
        SaveOutcome::Saved(reservation) => {
            tracing::info!(
                reservation_id = %reservation.reservation_id,
                member_id = %reservation.member_id,
                book_id = %reservation.book_id,
                "Reservation created"
            );
            Ok(reservation)
        }
        SaveOutcome::AlreadyExists => {
            tracing::warn!(
                member_id = %member.member_id,
                book_id = %book.book_id,
                "Concurrent duplicate reservation rejected by store"
            );
            Err(ReservationApplicationError::ReservationAlreadyExists)
        }
    }
}

/// 予約をIDで取得する
pub async fn get_reservation(
    deps: &ServiceDependencies,
    reservation_id: ReservationId,
) -> Result<Reservation> {
    load_reservation(&deps.reservation_repository, reservation_id).await
}

/// 予約を取り消す
///
/// 予約は物理削除される。戻り値は削除前の状態。
/// 取得と削除の間に別リクエストで削除された場合は`ReservationNotFound`。
pub async fn delete_reservation(
    deps: &ServiceDependencies,
    reservation_id: ReservationId,
) -> Result<Reservation> {
    let reservation = load_reservation(&deps.reservation_repository, reservation_id).await?;

    let deleted = deps
        .reservation_repository
        .delete(reservation_id)
        .await
        .map_err(ReservationApplicationError::RepositoryError)?;

    if !deleted {
        return Err(ReservationApplicationError::ReservationNotFound);
    }

    tracing::info!(reservation_id = %reservation_id, "Reservation cancelled");
    Ok(reservation)
}

/// 呼び出し元の会員の予約一覧を取得する
///
/// 順序はストア依存で保証しない。
pub async fn get_reservations_by_member(
    deps: &ServiceDependencies,
    caller: &CallerIdentity,
) -> Result<Vec<Reservation>> {
    let member = load_member(&deps.member_service, caller.member_id()).await?;

    deps.reservation_repository
        .find_all_by_member(member.member_id)
        .await
        .map_err(ReservationApplicationError::RepositoryError)
}

/// 書籍の予約数を数える
pub async fn count_book_reservations(
    deps: &ServiceDependencies,
    book_id: BookId,
) -> Result<BookReservationCount> {
    let book = load_book(&deps.book_service, book_id).await?;

    let count = deps
        .reservation_repository
        .count_by_book(book.book_id)
        .await
        .map_err(ReservationApplicationError::RepositoryError)?;

    Ok(BookReservationCount {
        book_id: book.book_id,
        count,
    })
}
