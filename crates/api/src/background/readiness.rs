//! Flips the readiness flag once a fixed startup delay has elapsed.

use std::time::Duration;

use movies_core::readiness::ReadinessFlag;
use tokio_util::sync::CancellationToken;

/// Wait for `delay`, then mark the process ready.
///
/// Returns early without touching the flag if `cancel` fires first.
pub async fn run(flag: ReadinessFlag, delay: Duration, cancel: CancellationToken) {
    tracing::info!(delay_secs = delay.as_secs(), "Service is not ready yet");

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!("Readiness task stopping before startup delay elapsed");
        }
        _ = tokio::time::sleep(delay) => {
            if flag.mark_ready() {
                tracing::info!("Service is ready");
            }
        }
    }
}
