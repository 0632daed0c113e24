use crate::domain::{
    NewReservation, Reservation,
    value_objects::{BookId, MemberId, ReservationId},
};
use crate::ports::reservation_repository::{
    ReservationRepository as ReservationRepositoryTrait, Result, SaveOutcome,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをReservationに変換する
fn map_row_to_reservation(row: &PgRow) -> Reservation {
    Reservation {
        reservation_id: ReservationId::from_i64(row.get("reservation_id")),
        member_id: MemberId::from_uuid(row.get("member_id")),
        book_id: BookId::from_uuid(row.get("book_id")),
        reserved_at: row.get("reserved_at"),
    }
}

/// PostgreSQL implementation of ReservationRepository
///
/// Reservation ids come from a BIGSERIAL column.
/// The `(member_id, book_id)` unique constraint makes duplicate inserts
/// fail atomically, so the application-level existence check cannot race.
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new ReservationRepository with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepositoryTrait for ReservationRepository {
    async fn exists_by_member_and_book(
        &self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM reservations
                WHERE member_id = $1 AND book_id = $2
            )
            "#,
        )
        .bind(member_id.value())
        .bind(book_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Insert a reservation
    ///
    /// ON CONFLICT DO NOTHING returns no row when the pair is already
    /// reserved, which is reported as `SaveOutcome::AlreadyExists`.
    async fn save(&self, reservation: NewReservation) -> Result<SaveOutcome> {
        let row = sqlx::query(
            r#"
            INSERT INTO reservations (
                member_id,
                book_id,
                reserved_at
            )
            VALUES ($1, $2, $3)
            ON CONFLICT (member_id, book_id) DO NOTHING
            RETURNING
                reservation_id,
                member_id,
                book_id,
                reserved_at
            "#,
        )
        .bind(reservation.member_id.value())
        .bind(reservation.book_id.value())
        .bind(reservation.reserved_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some(row) => SaveOutcome::Saved(map_row_to_reservation(&row)),
            None => SaveOutcome::AlreadyExists,
        })
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> Result<Option<Reservation>> {
        let row = sqlx::query(
            r#"
            SELECT
                reservation_id,
                member_id,
                book_id,
                reserved_at
            FROM reservations
            WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_reservation))
    }

    async fn delete(&self, reservation_id: ReservationId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE reservation_id = $1")
            .bind(reservation_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Find all reservations held by a member, oldest first
    async fn find_all_by_member(&self, member_id: MemberId) -> Result<Vec<Reservation>> {
        let rows = sqlx::query(
            r#"
            SELECT
                reservation_id,
                member_id,
                book_id,
                reserved_at
            FROM reservations
            WHERE member_id = $1
            ORDER BY reserved_at ASC, reservation_id ASC
            "#,
        )
        .bind(member_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_reservation).collect())
    }

    async fn count_by_book(&self, book_id: BookId) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM reservations
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.value())
        .fetch_one(&self.pool)
        .await?;

        let count = u64::try_from(count).map_err(|_| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("reservation count out of range: {}", count),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        Ok(count)
    }
}
