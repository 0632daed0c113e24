use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員 - 会員管理コンテキストが所有するエンティティ
///
/// 予約コンテキストは会員を参照するだけで、所有・変更はしない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
        }
    }
}

/// 認証済みの呼び出し元
///
/// 認証そのものは境界の外で済んでいる前提。
/// 予約コンテキストではこの値を会員IDとして解決するだけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    member_id: MemberId,
}

impl CallerIdentity {
    pub fn new(member_id: MemberId) -> Self {
        Self { member_id }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }
}
