use serde::{Deserialize, Serialize};

use super::BookId;

/// 書籍 - カタログ管理コンテキストが所有するエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
}

impl Book {
    pub fn new(book_id: BookId, title: impl Into<String>) -> Self {
        Self {
            book_id,
            title: title.into(),
        }
    }
}
