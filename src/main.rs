use dioxus_logger::tracing;

use holocron::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", config.bind_address());

    if let Err(e) = startup::serve(&config, db).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
