use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cache;
mod config;
mod domain;
mod messaging;
mod sequence;
mod store;

use config::Config;
use domain::customer::{Address, RegistrationRequest, RegistrationService};
use messaging::{CustomerEventsProducer, KafkaBus};
use sequence::InMemorySequenceStore;
use store::InMemoryCustomerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging with environment-based filtering; override with
    // RUST_LOG, e.g. RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_registry=debug")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(brokers = %config.brokers, topic = %config.topic, "starting customer registry");

    // === 1. Wire collaborators ===
    let bus = Arc::new(KafkaBus::new(&config.brokers)?);
    let producer = CustomerEventsProducer::new(bus, &config.topic);
    let service = RegistrationService::new(
        Arc::new(InMemoryCustomerStore::new()),
        Arc::new(InMemorySequenceStore::new()),
        producer,
    );

    // === 2. Register a few customers across two tenants ===
    let ada = service
        .register(RegistrationRequest {
            tenant_id: "acme".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            surname: Some("Lovelace".to_string()),
            phone_number: Some("+44 20 7946 0000".to_string()),
            address: Some(Address {
                street: "12 St James's Square".to_string(),
                city: "London".to_string(),
                state: "Greater London".to_string(),
                postal_code: "SW1Y 4JH".to_string(),
                country: "GB".to_string(),
            }),
        })
        .await?;
    tracing::info!(customer_number = %ada.customer_number, "registered ada");

    let grace = service
        .register(RegistrationRequest {
            tenant_id: "globex".to_string(),
            email: "grace@example.com".to_string(),
            name: Some("Grace".to_string()),
            surname: Some("Hopper".to_string()),
            phone_number: None,
            address: None,
        })
        .await?;
    // Numbers come from one global counter, so globex starts past acme.
    tracing::info!(customer_number = %grace.customer_number, "registered grace");

    // === 3. A duplicate email is rejected, whatever the tenant ===
    if let Err(e) = service
        .register(RegistrationRequest {
            tenant_id: "initech".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
            surname: None,
            phone_number: None,
            address: None,
        })
        .await
    {
        tracing::warn!(error = %e, "duplicate registration rejected");
    }

    // === 4. Read paths ===
    let page = service.get_customers("acme", 0, 10).await?;
    tracing::info!(count = page.items.len(), total = page.total_elements, "acme customers");

    let fetched = service
        .get_customer(&ada.tenant_id, &ada.customer_number)
        .await?;
    tracing::info!(email = %fetched.email, "fetched by tenant and number");

    // === 5. Let in-flight event publishes drain before exiting ===
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    Ok(())
}
