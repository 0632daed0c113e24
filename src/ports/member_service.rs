use crate::domain::{Member, value_objects::MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員サービスポート
///
/// 予約コンテキストと会員コンテキストの境界を維持する。
/// 実装は状態を書き換えない参照専用の機能とし、並行に呼び出しても安全であること。
#[async_trait]
pub trait MemberService: Send + Sync {
    /// IDで会員を解決する
    ///
    /// 存在しない場合は`Ok(None)`。`Err`は基盤側の障害のみを表す。
    async fn find_member_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;
}
