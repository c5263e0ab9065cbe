//! Notice fan-out backed by a `tokio::sync::broadcast` channel.
//!
//! [`NotificationBus`] carries the `{level, message}` notices the form and
//! account flows raise. Shared via `Arc<NotificationBus>`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use telconf_core::navigation::Notice;
use tokio::sync::broadcast;

/// A notice with the time it was raised.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEvent {
    #[serde(flatten)]
    pub notice: Notice,
    pub timestamp: DateTime<Utc>,
}

impl NotificationEvent {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            timestamp: Utc::now(),
        }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

pub struct NotificationBus {
    sender: broadcast::Sender<NotificationEvent>,
}

impl NotificationBus {
    /// Create a bus with a specific channel capacity. Slow receivers see
    /// `RecvError::Lagged` once the buffer overflows.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to every current subscriber. Dropped when nobody listens.
    pub fn publish(&self, notice: Notice) {
        tracing::debug!(level = notice.level.as_str(), message = %notice.message, "Notice");
        let _ = self.sender.send(NotificationEvent::new(notice));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.sender.subscribe()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
