use std::sync::Arc;

use crate::cache::CustomerCache;
use crate::messaging::CustomerEventsProducer;
use crate::sequence::{SequenceError, SequenceStore};
use crate::store::{CustomerStore, Page, SaveError, StoreError};

use super::errors::CustomerError;
use super::events::{CustomerEvent, CustomerEventType};
use super::model::{ensure_valid_email, ensure_valid_tenant_id, Address, Customer, CUSTOMERS_SEQUENCE};
use super::number::format_customer_number;

// ============================================================================
// Registration Service - Orchestration
// ============================================================================
//
// Orchestrates: validate → draw number → build record → publish → persist.
//
// The registration event goes out before the save is confirmed, and the
// publish is never awaited. Both are contract, not accident: a downstream
// consumer can observe an event for a registration whose save later failed,
// and broker latency never shows up in registration latency.
//
// ============================================================================

/// Input for a registration; only `tenant_id` and `email` are required.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub tenant_id: String,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<Address>,
}

pub struct RegistrationService {
    customers: Arc<dyn CustomerStore>,
    sequences: Arc<dyn SequenceStore>,
    producer: CustomerEventsProducer,
    cache: CustomerCache,
}

impl RegistrationService {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        sequences: Arc<dyn SequenceStore>,
        producer: CustomerEventsProducer,
    ) -> Self {
        Self {
            customers,
            sequences,
            producer,
            cache: CustomerCache::new(),
        }
    }

    /// Registers a customer and returns the persisted record with its
    /// store-assigned id.
    ///
    /// Validation happens before any side effect; an invalid tenant id or
    /// email leaves the counter untouched. Once the number is drawn the call
    /// runs to completion or failure, with no cancellation point.
    pub async fn register(&self, request: RegistrationRequest) -> Result<Customer, CustomerError> {
        ensure_valid_tenant_id(&request.tenant_id)?;
        ensure_valid_email(&request.email)?;

        let sequence = self
            .sequences
            .next_value(CUSTOMERS_SEQUENCE)
            .await
            .map_err(|SequenceError::Unavailable(cause)| CustomerError::StoreUnavailable(cause))?;
        let customer_number = format_customer_number(sequence);

        let customer = Customer {
            id: None,
            tenant_id: request.tenant_id,
            customer_number,
            email: request.email,
            name: request.name,
            surname: request.surname,
            phone_number: request.phone_number,
            address: request.address,
        };

        // Published before persistence is confirmed, fire-and-forget.
        let event = CustomerEvent::new(CustomerEventType::New, customer.clone());
        self.producer.send_customer_event(&event);

        let saved = self.customers.save(customer).await.map_err(|e| match e {
            SaveError::DuplicateEmail => CustomerError::DuplicateEmail,
            SaveError::Unavailable(cause) => CustomerError::RegistrationFailed(cause),
        })?;

        tracing::info!(
            tenant_id = %saved.tenant_id,
            customer_number = %saved.customer_number,
            "customer registered"
        );

        Ok(saved)
    }

    /// Lists a tenant's customers ordered by customer number ascending.
    /// A tenant with no customers gets an empty page, not an error.
    pub async fn get_customers(
        &self,
        tenant_id: &str,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<Customer>, CustomerError> {
        ensure_valid_tenant_id(tenant_id)?;

        self.customers
            .find_all_by_tenant(tenant_id, page_number, page_size)
            .await
            .map_err(|StoreError::Unavailable(cause)| CustomerError::StoreUnavailable(cause))
    }

    /// Fetches one customer, consulting the cache first.
    ///
    /// This is the only code path that populates the cache; `register` never
    /// touches it. Cached entries are never invalidated, so repeated calls
    /// keep returning the first snapshot read.
    pub async fn get_customer(
        &self,
        tenant_id: &str,
        customer_number: &str,
    ) -> Result<Customer, CustomerError> {
        ensure_valid_tenant_id(tenant_id)?;

        if let Some(cached) = self.cache.lookup(tenant_id, customer_number) {
            return Ok(cached);
        }

        let found = self
            .customers
            .find_by_tenant_and_number(tenant_id, customer_number)
            .await
            .map_err(|StoreError::Unavailable(cause)| CustomerError::StoreUnavailable(cause))?;

        match found {
            Some(customer) => {
                self.cache.store(customer.clone());
                Ok(customer)
            }
            None => Err(CustomerError::NotFound {
                tenant_id: tenant_id.to_string(),
                customer_number: customer_number.to_string(),
            }),
        }
    }
}
