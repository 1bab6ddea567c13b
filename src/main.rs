use lingo_api::{Config, Result, server};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    tracing::info!(
        "Loaded configuration: port {}, {} allowed origin(s)",
        config.port,
        config.cors.allowed_origins.len()
    );
    for origin in &config.cors.allowed_origins {
        tracing::debug!("  - CORS origin {:?}", origin);
    }

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    server::serve(config, shutdown_rx).await
}

fn setup_tracing() {
    // Если RUST_LOG не установлена, используем "info" по умолчанию
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
