//! 開発用サーバーのモックに会員・書籍を登録する
//!
//! 値はカンマ区切りのUUID一覧（例: `SEED_MEMBER_IDS=uuid1,uuid2`）。

use super::{BookService, MemberService};
use crate::domain::{
    Book, Member,
    value_objects::{BookId, MemberId},
};
use uuid::Uuid;

/// カンマ区切りのUUID一覧を解析する
///
/// 空要素と前後の空白は無視する。1つでも不正なUUIDがあればエラー。
pub fn parse_id_list(raw: &str) -> Result<Vec<Uuid>, uuid::Error> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Uuid::parse_str)
        .collect()
}

/// 会員を登録し、登録件数を返す
pub fn seed_members(service: &MemberService, raw: &str) -> Result<usize, uuid::Error> {
    let ids = parse_id_list(raw)?;
    for id in &ids {
        let member_id = MemberId::from_uuid(*id);
        service.add_member(Member::new(member_id, format!("Member {}", member_id)));
    }
    Ok(ids.len())
}

/// 書籍を登録し、登録件数を返す
pub fn seed_books(service: &BookService, raw: &str) -> Result<usize, uuid::Error> {
    let ids = parse_id_list(raw)?;
    for id in &ids {
        let book_id = BookId::from_uuid(*id);
        service.add_book(Book::new(book_id, format!("Book {}", book_id)));
    }
    Ok(ids.len())
}
