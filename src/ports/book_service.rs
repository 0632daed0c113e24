use crate::domain::{Book, value_objects::BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍サービスポート
///
/// 予約コンテキストとカタログコンテキストの境界を維持する。
/// 予約コンテキストは書籍の存在確認にのみ使用する。
#[async_trait]
pub trait BookService: Send + Sync {
    /// IDで書籍を解決する
    ///
    /// 存在しない場合は`Ok(None)`。
    async fn find_book_by_id(&self, book_id: BookId) -> Result<Option<Book>>;
}
