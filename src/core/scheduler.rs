//! Background scheduler for the alert generation engine.
//!
//! Waits out a warm-up delay so the rest of the process can finish
//! initializing, then runs one generation cycle per interval tick until the
//! cancellation token fires. Every wait is raced against the token, so
//! shutdown is prompt; batches commit independently, so nothing is left
//! half-written.

use crate::config::settings::EngineSettings;
use crate::core::engine;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Spawns the scheduler loop onto the runtime and returns its handle.
pub fn spawn_alert_scheduler(
    db: DatabaseConnection,
    settings: EngineSettings,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(run_alert_scheduler(db, settings, cancel))
}

/// Runs the scheduler loop until the cancellation token fires.
///
/// A cycle-level failure (households cannot be enumerated) is logged and the
/// loop simply waits for the next tick; the interval itself is the retry
/// mechanism.
pub async fn run_alert_scheduler(
    db: DatabaseConnection,
    settings: EngineSettings,
    cancel: CancellationToken,
) {
    info!(
        "Alert scheduler started (interval {}m, warm-up {}s)",
        settings.interval_minutes, settings.warmup_seconds
    );

    tokio::select! {
        () = sleep(Duration::from_secs(settings.warmup_seconds)) => {}
        () = cancel.cancelled() => {
            info!("Alert scheduler stopped during warm-up.");
            return;
        }
    }

    // A zero interval would busy-loop; clamp to one minute
    let period = Duration::from_secs(settings.interval_minutes.max(1) * 60);
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Utc::now();
                match engine::run_generation_cycle(&db, now, &cancel).await {
                    Ok(summary) => info!("{}", engine::format_cycle_summary(&summary)),
                    Err(e) => error!("Alert generation cycle failed: {}", e),
                }
            }
            () = cancel.cancelled() => {
                info!("Alert scheduler stopped.");
                break;
            }
        }
    }
}
