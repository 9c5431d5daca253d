//! Poll timer handle.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

/// A recurring timer running on its own task.
///
/// Dropping the handle stops the timer.
#[derive(Debug)]
pub(crate) struct PollTimer {
    task: JoinHandle<()>,
}

impl PollTimer {
    /// Run `first` immediately, then `on_tick` every `period` counted from now.
    ///
    /// Ticks that fall due while a previous callback is still running are
    /// collapsed into one.
    pub(crate) fn arm<F, Fut, T, TFut>(period: Duration, first: F, mut on_tick: T) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
        T: FnMut() -> TFut + Send + 'static,
        TFut: Future<Output = ()> + Send + 'static,
    {
        let start = Instant::now() + period;

        let task = tokio::spawn(async move {
            first().await;

            let mut ticks = time::interval_at(start, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticks.tick().await;
                trace!("Poll timer tick");
                on_tick().await;
            }
        });

        Self { task }
    }

    /// Stop the timer. Safe to call more than once.
    pub(crate) fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_then_ticks() {
        let firsts = Arc::new(AtomicUsize::new(0));
        let ticks = Arc::new(AtomicUsize::new(0));

        let f = Arc::clone(&firsts);
        let t = Arc::clone(&ticks);
        let timer = PollTimer::arm(
            Duration::from_secs(10),
            move || async move {
                f.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                let t = Arc::clone(&t);
                async move {
                    t.fetch_add(1, Ordering::SeqCst);
                }
            },
        );

        settle().await;
        assert_eq!(firsts.load(Ordering::SeqCst), 1);
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        for _ in 0..2 {
            time::advance(Duration::from_secs(10)).await;
            settle().await;
        }
        assert_eq!(ticks.load(Ordering::SeqCst), 3);

        drop(timer);
        time::advance(Duration::from_secs(30)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }
}
