use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AsyncAction;

/// Quiet period a query must survive before it becomes effective.
pub const QUIET_INTERVAL: Duration = Duration::from_millis(500);

/// Trailing-edge debouncer for the search input.
///
/// Each submitted value schedules one emission after the quiet interval; a
/// newer submission aborts the pending task, so superseded values are
/// discarded and never fire. There is no leading-edge emission.
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_interval(QUIET_INTERVAL)
    }

    pub fn with_interval(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Restart the timer with `query` as the candidate emission.
    pub fn submit(&mut self, query: String, tx: mpsc::Sender<AsyncAction>) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            let _ = tx.send(AsyncAction::QueryStabilized(query)).await;
        }));
    }

    /// Drop the pending emission without firing it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Skip the remaining quiet time and emit `query` now (Enter key).
    pub fn flush(&mut self, query: String, tx: mpsc::Sender<AsyncAction>) {
        self.cancel();
        tokio::spawn(async move {
            let _ = tx.send(AsyncAction::QueryStabilized(query)).await;
        });
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    async fn expect_emission(rx: &mut mpsc::Receiver<AsyncAction>) -> String {
        match timeout(Duration::from_millis(500), rx.recv()).await {
            Ok(Some(AsyncAction::QueryStabilized(q))) => q,
            other => panic!("expected a stabilized query, got {:?}", other),
        }
    }

    async fn expect_silence(rx: &mut mpsc::Receiver<AsyncAction>, window: Duration) {
        if let Ok(Some(action)) = timeout(window, rx.recv()).await {
            panic!("unexpected emission: {:?}", action);
        }
    }

    #[tokio::test]
    async fn burst_yields_only_the_last_value() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::with_interval(Duration::from_millis(60));

        for q in ["b", "ba", "bat"] {
            debouncer.submit(q.to_string(), tx.clone());
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(expect_emission(&mut rx).await, "bat");
        expect_silence(&mut rx, Duration::from_millis(150)).await;
    }

    #[tokio::test]
    async fn no_leading_edge_emission() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::with_interval(Duration::from_millis(80));

        debouncer.submit("dune".to_string(), tx.clone());
        expect_silence(&mut rx, Duration::from_millis(30)).await;
        assert_eq!(expect_emission(&mut rx).await, "dune");
    }

    #[tokio::test]
    async fn cancel_discards_the_pending_value() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::with_interval(Duration::from_millis(40));

        debouncer.submit("alien".to_string(), tx.clone());
        debouncer.cancel();
        expect_silence(&mut rx, Duration::from_millis(120)).await;
    }

    #[tokio::test]
    async fn flush_emits_immediately() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::with_interval(Duration::from_secs(60));

        debouncer.submit("her".to_string(), tx.clone());
        debouncer.flush("heat".to_string(), tx.clone());

        assert_eq!(expect_emission(&mut rx).await, "heat");
        expect_silence(&mut rx, Duration::from_millis(100)).await;
    }
}
