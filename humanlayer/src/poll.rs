//! The wait between polls of a pending contact record.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the polling task between store reads.
///
/// Injected into [`HumanLayer`](crate::HumanLayer) so tests can poll
/// without waiting and production code can use a real timer.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for roughly `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSleep;

#[async_trait]
impl Sleeper for NoSleep {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn object_safety() {
        _assert_send_sync::<Arc<dyn Sleeper>>();
        let _: Arc<dyn Sleeper> = Arc::new(TokioSleeper);
        let _: Arc<dyn Sleeper> = Arc::new(NoSleep);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_advances_clock() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_secs(3)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn no_sleep_does_not_advance_clock() {
        let start = tokio::time::Instant::now();
        NoSleep.sleep(Duration::from_secs(3)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
