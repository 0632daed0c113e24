pub mod reservation_repository;

// パブリックに型を再エクスポート
pub use reservation_repository::ReservationRepository as PostgresReservationRepository;
