//! Application configuration loaded from environment variables.

/// Runtime configuration with sensible defaults for local development.
///
/// Reads from environment variables:
/// - `KAFKA_BROKERS` — bootstrap servers (default: `"127.0.0.1:9092"`)
/// - `CUSTOMER_EVENTS_TOPIC` — topic for registration events
///   (default: `"customer-events"`)
/// - `RUST_LOG` — tracing filter directive
#[derive(Debug, Clone)]
pub struct Config {
    pub brokers: String,
    pub topic: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            brokers: std::env::var("KAFKA_BROKERS")
                .unwrap_or_else(|_| "127.0.0.1:9092".to_string()),
            topic: std::env::var("CUSTOMER_EVENTS_TOPIC")
                .unwrap_or_else(|_| "customer-events".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brokers: "127.0.0.1:9092".to_string(),
            topic: "customer-events".to_string(),
        }
    }
}
