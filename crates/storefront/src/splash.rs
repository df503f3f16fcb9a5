//! Splash screen timer.
//!
//! The splash screen stays up for a short delay, fades out, and then hands
//! over to the registration screen. [`SplashTimer`] runs that delay on the
//! tokio runtime and calls a completion callback exactly once, unless the
//! timer is cancelled first. Dropping the handle cancels the timer, so a
//! discarded view never receives a late callback.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::SplashConfig;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Completion callback shared by the timer task and its handle.
///
/// Whoever takes it first decides the outcome: the task runs it, the handle
/// drops it.
type CallbackSlot = Arc<Mutex<Option<Callback>>>;

/// How a splash timer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashOutcome {
    /// The delay elapsed and the callback ran.
    Completed,
    /// The timer was cancelled before the callback ran.
    Cancelled,
}

/// Handle to a running splash timer.
pub struct SplashTimer {
    handle: JoinHandle<bool>,
    callback: CallbackSlot,
}

impl fmt::Debug for SplashTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplashTimer")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl SplashTimer {
    /// Start a timer that calls `on_complete` after `delay` plus `fade`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start<F>(delay: Duration, fade: Duration, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let on_complete: Callback = Box::new(on_complete);
        let callback: CallbackSlot = Arc::new(Mutex::new(Some(on_complete)));
        let slot = Arc::clone(&callback);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Splash delay elapsed, fading out");
            tokio::time::sleep(fade).await;

            // The lock is held while the callback runs, so `cancel` cannot
            // return in the middle of it.
            let mut guard = lock(&slot);
            guard.take().is_some_and(|on_complete| {
                on_complete();
                true
            })
        });
        Self { handle, callback }
    }

    /// Start a timer using the configured delay and fade.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn from_config<F>(config: &SplashConfig, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::start(config.delay, config.fade, on_complete)
    }

    /// Stop the timer.
    ///
    /// Once this returns the callback has either already finished or will
    /// never run. If the callback is running on another thread, this waits
    /// for it.
    pub fn cancel(&self) {
        if lock(&self.callback).take().is_some() {
            debug!("Splash timer cancelled");
        }
        self.handle.abort();
    }

    /// Returns true once the timer has completed or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the timer to end.
    ///
    /// A panic raised by the callback is resumed on the caller.
    pub async fn wait(mut self) -> SplashOutcome {
        match (&mut self.handle).await {
            Ok(true) => SplashOutcome::Completed,
            Ok(false) => SplashOutcome::Cancelled,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => SplashOutcome::Cancelled,
        }
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        lock(&self.callback).take();
        self.handle.abort();
    }
}

/// A panicking callback poisons the slot; the `Option` inside is still valid.
fn lock(slot: &Mutex<Option<Callback>>) -> MutexGuard<'_, Option<Callback>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay_and_fade() {
        let (count, on_complete) = counter();
        let start = tokio::time::Instant::now();
        let timer = SplashTimer::from_config(&SplashConfig::default(), on_complete);

        tokio::time::sleep(Duration::from_millis(850)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!timer.is_finished());

        assert_eq!(timer.wait().await, SplashOutcome::Completed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() >= Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_callback() {
        let (count, on_complete) = counter();
        let timer = SplashTimer::start(
            Duration::from_millis(800),
            Duration::from_millis(100),
            on_complete,
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        timer.cancel();
        assert_eq!(timer.wait().await, SplashOutcome::Cancelled);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_fade_prevents_callback() {
        let (count, on_complete) = counter();
        let timer = SplashTimer::start(
            Duration::from_millis(800),
            Duration::from_millis(100),
            on_complete,
        );

        tokio::time::sleep(Duration::from_millis(850)).await;
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, on_complete) = counter();
        let timer = SplashTimer::start(Duration::from_millis(800), Duration::ZERO, on_complete);
        drop(timer);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_is_harmless() {
        let (count, on_complete) = counter();
        let timer =
            SplashTimer::start(Duration::from_millis(10), Duration::from_millis(1), on_complete);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(timer.is_finished());
        timer.cancel();
        assert_eq!(timer.wait().await, SplashOutcome::Completed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    #[should_panic(expected = "splash callback failed")]
    async fn test_callback_panic_is_resumed() {
        let timer = SplashTimer::start(Duration::from_millis(10), Duration::ZERO, || {
            panic!("splash callback failed");
        });
        timer.wait().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cancel_at_deadline_is_final() {
        for _ in 0..200 {
            let (count, on_complete) = counter();
            let timer = SplashTimer::start(Duration::from_millis(1), Duration::ZERO, on_complete);

            tokio::time::sleep(Duration::from_millis(1)).await;
            timer.cancel();
            let seen = count.load(Ordering::SeqCst);

            let outcome = timer.wait().await;
            tokio::time::sleep(Duration::from_millis(2)).await;
            let fired = count.load(Ordering::SeqCst);
            assert_eq!(fired, seen);
            assert_eq!(outcome == SplashOutcome::Completed, fired == 1);
        }
    }
}
