use rusty_library_reservation::{
    adapters::mock::{
        InMemoryReservationRepository, book_service::BookService as MockBookService,
        member_service::MemberService as MockMemberService, seed,
    },
    adapters::postgres::PostgresReservationRepository,
    api::{handlers::AppState, router::create_router},
    application::reservation::ServiceDependencies,
    ports::ReservationRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rusty_library_reservation=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Reservation store: PostgreSQL when DATABASE_URL is set, in-memory otherwise
    let reservation_repository: Arc<dyn ReservationRepository> =
        match std::env::var("DATABASE_URL") {
            Ok(database_url) => {
                let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(5);

                tracing::info!(max_connections, "Connecting to PostgreSQL");

                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(max_connections)
                    .connect(&database_url)
                    .await
                    .expect("Failed to connect to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .expect("Failed to run migrations");

                Arc::new(PostgresReservationRepository::new(pool))
            }
            Err(_) => {
                tracing::warn!("DATABASE_URL is not set, using in-memory reservation store");
                Arc::new(InMemoryReservationRepository::new())
            }
        };

    // Member and catalog lookups live in other contexts; mocks stand in for them here,
    // seeded from SEED_MEMBER_IDS / SEED_BOOK_IDS (comma-separated UUIDs)
    let member_service = Arc::new(MockMemberService::new());
    let book_service = Arc::new(MockBookService::new());

    if let Ok(raw) = std::env::var("SEED_MEMBER_IDS") {
        let count = seed::seed_members(&member_service, &raw)
            .expect("SEED_MEMBER_IDS must be comma-separated UUIDs");
        tracing::info!(count, "Seeded member lookup");
    }
    if let Ok(raw) = std::env::var("SEED_BOOK_IDS") {
        let count = seed::seed_books(&book_service, &raw)
            .expect("SEED_BOOK_IDS must be comma-separated UUIDs");
        tracing::info!(count, "Seeded book lookup");
    }
    if member_service.is_empty() || book_service.is_empty() {
        tracing::warn!(
            "No members or books seeded; every reservation request will be rejected as not found"
        );
    }

    // Create service dependencies
    let service_deps = ServiceDependencies {
        reservation_repository,
        member_service,
        book_service,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
