use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rdkafka::{
    config::ClientConfig,
    producer::{FutureProducer, FutureRecord},
};

use super::MessageBus;

// ============================================================================
// Kafka-backed Message Bus
// ============================================================================

pub struct KafkaBus {
    producer: FutureProducer,
}

impl KafkaBus {
    pub fn new(brokers: &str) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()
            .context("failed to create Kafka producer")?;

        Ok(Self { producer })
    }
}

#[async_trait]
impl MessageBus for KafkaBus {
    async fn send(&self, topic: &str, key: &str, payload: &str) -> Result<()> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        self.producer
            .send(record, rdkafka::util::Timeout::After(Duration::from_secs(5)))
            .await
            .map_err(|(e, _)| anyhow::anyhow!("Kafka send error: {}", e))?;

        Ok(())
    }
}
