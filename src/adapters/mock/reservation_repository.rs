use crate::domain::{
    NewReservation, Reservation,
    value_objects::{BookId, MemberId, ReservationId},
};
use crate::ports::reservation_repository::{
    ReservationRepository as ReservationRepositoryTrait, Result, SaveOutcome,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct State {
    last_id: i64,
    reservations: BTreeMap<ReservationId, Reservation>,
}

/// ReservationRepositoryのインメモリ実装
///
/// IDは1からの連番で採番する。
/// 重複確認と挿入は同じロックの中で行うため、(会員, 書籍) の一意性は並行時も保たれる。
pub struct ReservationRepository {
    state: Mutex<State>,
}

impl ReservationRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// 保存されている予約の総数
    pub fn len(&self) -> usize {
        self.lock().reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepositoryTrait for ReservationRepository {
    async fn exists_by_member_and_book(
        &self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<bool> {
        Ok(self
            .lock()
            .reservations
            .values()
            .any(|r| r.is_for(member_id, book_id)))
    }

    async fn save(&self, reservation: NewReservation) -> Result<SaveOutcome> {
        let mut state = self.lock();

        if state
            .reservations
            .values()
            .any(|r| r.is_for(reservation.member_id, reservation.book_id))
        {
            return Ok(SaveOutcome::AlreadyExists);
        }

        state.last_id += 1;
        let saved = reservation.with_id(ReservationId::from_i64(state.last_id));
        state
            .reservations
            .insert(saved.reservation_id, saved.clone());

        Ok(SaveOutcome::Saved(saved))
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> Result<Option<Reservation>> {
        Ok(self.lock().reservations.get(&reservation_id).cloned())
    }

    async fn delete(&self, reservation_id: ReservationId) -> Result<bool> {
        Ok(self.lock().reservations.remove(&reservation_id).is_some())
    }

    async fn find_all_by_member(&self, member_id: MemberId) -> Result<Vec<Reservation>> {
        Ok(self
            .lock()
            .reservations
            .values()
            .filter(|r| r.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn count_by_book(&self, book_id: BookId) -> Result<u64> {
        let count = self
            .lock()
            .reservations
            .values()
            .filter(|r| r.book_id == book_id)
            .count();
        Ok(count as u64)
    }
}
