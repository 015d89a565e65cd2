use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    client,
    server::{config::Config, error::Error, model::app::AppState, router, service::seed::SeedService},
};

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

/// Upsert the canonical catalog records when `SEED_DATABASE` is enabled
pub async fn seed_if_enabled(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_database {
        return Ok(());
    }

    let seed_service = SeedService::new(db);
    seed_service.seed().await?;

    Ok(())
}

/// Restrict cross-origin access to the configured origins
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in allowed_origins {
        match HeaderValue::from_str(origin) {
            Ok(value) => origins.push(value),
            Err(e) => tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e),
        }
    }

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(origins)
}

/// Combine the API routes and the server-rendered pages into the application router
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    router::routes()
        .merge(client::router::routes())
        .layer(build_cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve once Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
