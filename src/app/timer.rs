use std::time::Duration;
use tokio::task::JoinHandle;

/// 最多只有一個待執行的延遲動作。
///
/// 重新排程會先取消舊的；drop 時也會取消，避免畫面換掉後舊的 callback 還跑出來。
#[derive(Debug, Default)]
pub struct DelayedAction {
    pending: Option<JoinHandle<()>>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter_action(counter: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = DelayedAction::new();

        timer.schedule(Duration::from_millis(1200), counter_action(&fired));
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_replaces_pending_action() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut timer = DelayedAction::new();

        timer.schedule(Duration::from_millis(1200), counter_action(&first));
        timer.schedule(Duration::from_millis(1200), counter_action(&second));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_prevent_firing() {
        let fired = Arc::new(AtomicUsize::new(0));

        let mut timer = DelayedAction::new();
        timer.schedule(Duration::from_millis(3000), counter_action(&fired));
        timer.cancel();
        assert!(!timer.is_pending());

        {
            let mut dropped = DelayedAction::new();
            dropped.schedule(Duration::from_millis(3000), counter_action(&fired));
        }

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
