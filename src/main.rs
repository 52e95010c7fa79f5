use thebutler::config;
use thebutler::core::scheduler;
use thebutler::errors::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenvy::dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load engine settings (missing config.toml falls back to defaults)
    let settings = config::settings::load_default_settings()?;
    info!(
        "Engine settings: interval {}m, warm-up {}s",
        settings.interval_minutes, settings.warmup_seconds
    );

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ensured."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Run the alert scheduler until Ctrl+C / SIGTERM
    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received.");
            signal_token.cancel();
        }
    });

    scheduler::run_alert_scheduler(db.clone(), settings, cancel_token).await;

    info!("Graceful shutdown...");
    db.close().await?;
    info!("Database connection closed.");
    Ok(())
}
