//! Timer-backed notification sink.
//!
//! Each notification is printed to stderr and cleared automatically after a
//! fixed delay. The delay runs on a tokio task so it never blocks command
//! handling; a newer notification or an explicit dismissal aborts it.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use roster_core::{Notification, NotificationSink};

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notification>,
    /// Bumped on every notify/dismiss so a stale timer can't clear a newer
    /// notification.
    generation: u64,
}

/// Notification sink that auto-dismisses after `delay`.
///
/// Must be used from within a tokio runtime.
pub struct TimedNotifier {
    delay: Duration,
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    echo: bool,
}

impl TimedNotifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            echo: true,
        }
    }

    /// Don't print notifications, only track them.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl NotificationSink for TimedNotifier {
    fn notify(&mut self, notification: Notification) {
        self.cancel_timer();

        if self.echo {
            let prefix = if notification.is_error() { "✗" } else { "✓" };
            eprintln!("{prefix} {}", notification.message);
        }

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.current = Some(notification);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.current = None;
                tracing::debug!("notification auto-dismissed after {}ms", delay.as_millis());
            }
        }));
    }

    fn dismiss(&mut self) {
        self.cancel_timer();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.current = None;
    }

    fn current(&self) -> Option<Notification> {
        lock(&self.slot).current.clone()
    }
}

impl Drop for TimedNotifier {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
