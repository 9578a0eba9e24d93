use anyhow::Result;
use async_trait::async_trait;

pub mod kafka;
pub mod producer;

pub use kafka::KafkaBus;
pub use producer::CustomerEventsProducer;

/// Message-bus client seam: string-keyed, string-valued sends to a topic,
/// resolving asynchronously with the broker outcome.
#[async_trait]
pub trait MessageBus: Send + Sync {
    async fn send(&self, topic: &str, key: &str, payload: &str) -> Result<()>;
}
