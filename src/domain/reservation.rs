use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, BookId, Member, MemberId, ReservationId};

/// 予約集約 - 1人の会員による1冊の書籍の取り置き
///
/// 不変条件：同じ (会員, 書籍) の組に対して予約は同時に1件まで。
/// この制約はストアの一意性制約で保証される。
///
/// 状態は「存在する／存在しない」の2つだけ。取り消しは物理削除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    // 識別子（ストアが採番）
    pub reservation_id: ReservationId,

    // 他の集約への参照（IDのみ）
    pub member_id: MemberId,
    pub book_id: BookId,

    // 監査情報
    pub reserved_at: DateTime<Utc>,
}

impl Reservation {
    /// 指定した (会員, 書籍) の組に対する予約か
    pub fn is_for(&self, member_id: MemberId, book_id: BookId) -> bool {
        self.member_id == member_id && self.book_id == book_id
    }
}

/// 永続化前の予約
///
/// IDはまだ無い。ストアに保存されて初めて`Reservation`になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub member_id: MemberId,
    pub book_id: BookId,
    pub reserved_at: DateTime<Utc>,
}

impl NewReservation {
    /// ストアが採番したIDを付与して予約を確定する
    pub fn with_id(self, reservation_id: ReservationId) -> Reservation {
        Reservation {
            reservation_id,
            member_id: self.member_id,
            book_id: self.book_id,
            reserved_at: self.reserved_at,
        }
    }
}

/// 純粋関数：書籍を予約する
///
/// 会員と書籍が解決済みであることを型で要求する。
/// 重複チェックはストアとの対話が必要なためアプリケーション層で行う。
///
/// 副作用なし。
pub fn reserve_book(member: &Member, book: &Book, reserved_at: DateTime<Utc>) -> NewReservation {
    NewReservation {
        member_id: member.member_id,
        book_id: book.book_id,
        reserved_at,
    }
}
