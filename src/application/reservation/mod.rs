mod errors;
mod reservation_service;

pub use errors::{ReservationApplicationError, Result};
pub use reservation_service::{
    BookReservationCount, ServiceDependencies, add_reservation, count_book_reservations,
    delete_reservation, get_reservation, get_reservations_by_member,
};
