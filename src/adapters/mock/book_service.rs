use crate::domain::{Book, value_objects::BookId};
use crate::ports::book_service::{BookService as BookServiceTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// BookServiceのモック実装
///
/// 登録された書籍だけを解決する。カタログの代わりにテストや開発用サーバーで使う。
pub struct BookService {
    books: Mutex<HashMap<BookId, Book>>,
}

impl BookService {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に書籍を登録
    pub fn add_book(&self, book: Book) {
        self.books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(book.book_id, book);
    }

    /// 書籍が1件も登録されていないか
    pub fn is_empty(&self) -> bool {
        self.books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Default for BookService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookServiceTrait for BookService {
    async fn find_book_by_id(&self, book_id: BookId) -> Result<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&book_id)
            .cloned())
    }
}
