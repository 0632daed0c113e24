use crate::domain::{
    NewReservation, Reservation,
    value_objects::{BookId, MemberId, ReservationId},
};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 保存の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 保存された予約（ストアが採番したIDを持つ）
    Saved(Reservation),
    /// 同じ (会員, 書籍) の予約が既に存在したため保存しなかった
    AlreadyExists,
}

/// 予約リポジトリポート
///
/// 予約レコードを排他的に所有する。個々の保存・削除はストア側で原子的に行われる。
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// (会員, 書籍) の組に予約が存在するか確認する
    async fn exists_by_member_and_book(
        &self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<bool>;

    /// 新しい予約を保存する
    ///
    /// (会員, 書籍) の一意性はストアが保証する。
    /// 事前の存在確認と保存の間に別の予約が入った場合も`SaveOutcome::AlreadyExists`を返す。
    async fn save(&self, reservation: NewReservation) -> Result<SaveOutcome>;

    /// IDで予約を取得する
    async fn find_by_id(&self, reservation_id: ReservationId) -> Result<Option<Reservation>>;

    /// 予約を物理削除する
    ///
    /// 削除した場合は`true`、対象が既に無かった場合は`false`。
    async fn delete(&self, reservation_id: ReservationId) -> Result<bool>;

    /// 会員の全予約を取得する（順序は保証しない）
    async fn find_all_by_member(&self, member_id: MemberId) -> Result<Vec<Reservation>>;

    /// 書籍に対する予約数を数える
    async fn count_by_book(&self, book_id: BookId) -> Result<u64>;
}
