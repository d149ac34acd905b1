use magazzino::core::{AppState, Config};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "magazzino=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configurazione: un TOKEN_SECRET mancante è fatale, qui si esce subito
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Configuration error: {}", message);
            std::process::exit(1);
        }
    };
    config.print_info();

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(&config.database_url)
        .await?;
    info!("Connected to MySQL database");

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = Arc::new(AppState::new(
        pool,
        config.token_secret.clone(),
        config.upload_dir.clone(),
    ));
    let app = magazzino::create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
