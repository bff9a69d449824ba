//! Transient success banner with an auto-hide timer.
//!
//! Showing a message spawns a tokio task that sleeps for the display
//! duration and then posts [`AppMessage::NotificationExpired`] back to the
//! main loop. Each show bumps a generation counter so an expiry from an
//! earlier timer never hides a newer message.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;

/// A single visible notification at most.
#[derive(Debug, Default)]
pub struct Notification {
    message: Option<String>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Notification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on screen.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Shows `message` and (re)starts the hide timer.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        duration: Duration,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) {
        self.cancel_timer();
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());

        let generation = self.generation;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::NotificationExpired(generation));
        }));
    }

    /// Handles a timer expiry.
    ///
    /// # Returns
    ///
    /// `true` if the notification was hidden, `false` for a stale expiry.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        self.timer = None;
        true
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Notification {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

// ============================================================================
// Tests
// ============================================================================
