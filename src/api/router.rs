use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, count_book_reservations, create_reservation, delete_reservation, get_reservation,
    list_my_reservations,
};

/// Creates the API router with all reservation endpoints
///
/// - POST /reservations - Reserve a book for the calling member
/// - GET /reservations - List the calling member's reservations
/// - GET /reservations/:id - Get a reservation
/// - DELETE /reservations/:id - Cancel a reservation
/// - GET /books/:id/reservations/count - Count reservations for a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route(
            "/reservations",
            post(create_reservation).get(list_my_reservations),
        )
        .route(
            "/reservations/:id",
            get(get_reservation).delete(delete_reservation),
        )
        .route(
            "/books/:id/reservations/count",
            get(count_book_reservations),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
