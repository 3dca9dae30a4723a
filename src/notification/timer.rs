use rocket::tokio::task::JoinHandle;
use rocket::tokio::time::sleep;
use std::time::Duration;

/// A single cancellable delayed callback.
/// Scheduling a new callback aborts the pending one.
#[derive(Debug, Default)]
pub struct AutoDismissTimer {
    pending: Option<JoinHandle<()>>,
}

impl AutoDismissTimer {
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, on_elapsed: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(rocket::tokio::spawn(async move {
            sleep(delay).await;
            on_elapsed();
        }));
    }

    /// Returns whether a callback was still waiting to be run.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for AutoDismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DELAY: Duration = Duration::from_millis(5000);

    fn counting_callback(counter: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
        let counter = counter.clone();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_run_callback_after_delay() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut timer = AutoDismissTimer::default();

        timer.schedule(DELAY, counting_callback(&counter));
        sleep(DELAY - Duration::from_millis(1)).await;
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(timer.is_pending());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(1, counter.load(Ordering::SeqCst));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_run_cancelled_callback() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut timer = AutoDismissTimer::default();
        timer.schedule(DELAY, counting_callback(&counter));

        assert!(timer.cancel());
        sleep(DELAY * 2).await;

        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn should_replace_pending_callback() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut timer = AutoDismissTimer::default();
        timer.schedule(DELAY, counting_callback(&counter));
        sleep(DELAY / 2).await;

        timer.schedule(DELAY, counting_callback(&counter));
        sleep(DELAY).await;
        sleep(Duration::from_millis(1)).await;

        assert_eq!(1, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn should_not_cancel_without_pending_callback() {
        let mut timer = AutoDismissTimer::default();

        assert!(!timer.cancel());
        assert!(!timer.is_pending());
    }
}
