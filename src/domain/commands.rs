use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BookId;

/// コマンド：書籍を予約する
///
/// 予約する会員は呼び出し元（`CallerIdentity`）から決まるため、コマンドには含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveBook {
    pub book_id: BookId,
    pub reserved_at: DateTime<Utc>,
}
