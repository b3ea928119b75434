//! Trailing-edge debouncer on the tokio timer.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Default quiet period before a search fires.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Emits a pushed value once no newer value has been pushed for `delay`.
///
/// Each push aborts the pending emission; intermediate values are dropped,
/// never queued. Emissions arrive on the receiver returned by [`new`].
///
/// [`new`]: Debouncer::new
pub struct Debouncer<T> {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                pending: Mutex::new(None),
                tx,
            },
            rx,
        )
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing whatever was pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn push(&self, value: T) {
        // Deadline is fixed here, not when the task first runs.
        let deadline = Instant::now() + self.delay;
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = tx.send(value);
        });

        if let Some(previous) = self.pending.lock().replace(task) {
            previous.abort();
        }
    }

    /// Drop the pending emission, if any.
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().take() {
            task.abort();
        }
    }

    /// Whether an emission is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.get_mut().take() {
            task.abort();
        }
    }
}
