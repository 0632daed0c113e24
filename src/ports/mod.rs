pub mod book_service;
pub mod member_service;
pub mod reservation_repository;

pub use book_service::BookService;
pub use member_service::MemberService;
pub use reservation_repository::{ReservationRepository, SaveOutcome};
