use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management backed by an in-process store
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Allow browser frontends on any origin to call the API
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the full application with state, sessions & CORS applied
pub fn build_app(state: AppState) -> Router {
    router::routes()
        .with_state(state)
        .layer(build_session_layer())
        .layer(build_cors_layer())
}

/// Bind to the configured address and serve the API until the process exits
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = build_app(AppState::from(db));

    let listener = TcpListener::bind(config.bind_address()).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
