use datacore::server::{config::Config, model::app::AppState, startup};
use dioxus_logger::tracing::{self, Level};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _ = dioxus_logger::init(Level::INFO);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), datacore::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    startup::seed_if_enabled(&config, &db).await?;

    let state = AppState::from((db, config.api_base_url.clone()));
    let router = startup::build_router(state, &config.allowed_origins);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Starting server on {}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
