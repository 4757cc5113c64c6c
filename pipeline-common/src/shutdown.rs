use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Resolves once the process receives SIGTERM or SIGINT.
pub async fn shutdown_signal() -> std::io::Result<()> {
    let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    let mut interrupt = signal::unix::signal(signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        _ = term.recv() => {},
        _ = interrupt.recv() => {},
    }

    Ok(())
}

/// Cancel `token` when a shutdown signal arrives.
///
/// If the signal handlers cannot be registered the token is left alone: the process
/// keeps running and can still be killed.
pub fn cancel_on_shutdown_signal(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => info!("shutting down gracefully..."),
            Err(e) => {
                error!("failed to register shutdown signal handlers: {}", e);
                return;
            }
        }

        token.cancel();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_shutdown_signal_waits() {
        // No signal is sent, so the future must not complete on its own.
        let result = timeout(Duration::from_millis(100), shutdown_signal()).await;

        assert!(
            result.is_err(),
            "shutdown_signal should not complete without a signal"
        );
    }

    #[tokio::test]
    async fn test_token_untouched_without_signal() {
        let token = CancellationToken::new();
        let handle = cancel_on_shutdown_signal(token.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!token.is_cancelled());

        handle.abort();
    }
}
