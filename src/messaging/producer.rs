use std::sync::Arc;

use tokio::task::JoinHandle;

use super::MessageBus;
use crate::domain::customer::CustomerEvent;

// ============================================================================
// Customer Events Producer - Fire-and-Forget Publication
// ============================================================================
//
// Publication is best-effort by contract: the send runs on a spawned task,
// the caller gets the handle back immediately, and whatever the broker says
// ends up in the log. Failures are not retried and never reach the
// registration caller.
//
// ============================================================================

pub struct CustomerEventsProducer {
    bus: Arc<dyn MessageBus>,
    topic: String,
}

impl CustomerEventsProducer {
    pub fn new(bus: Arc<dyn MessageBus>, topic: impl Into<String>) -> Self {
        Self {
            bus,
            topic: topic.into(),
        }
    }

    /// Serializes the event and sends it keyed by its event id.
    ///
    /// Returns as soon as the send task is spawned; the returned handle
    /// resolves when the broker acknowledges or rejects the message, and is
    /// only awaited by tests that need the outcome to have been logged.
    pub fn send_customer_event(&self, event: &CustomerEvent) -> JoinHandle<()> {
        let key = event.customer_event_id.to_string();
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, key = %key, "failed to serialize customer event");
                return tokio::spawn(async {});
            }
        };

        let bus = self.bus.clone();
        let topic = self.topic.clone();

        tokio::spawn(async move {
            match bus.send(&topic, &key, &payload).await {
                Ok(()) => {
                    tracing::info!(
                        topic = %topic,
                        key = %key,
                        "customer event published"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        topic = %topic,
                        key = %key,
                        "failed to publish customer event"
                    );
                }
            }
        })
    }
}
