use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::customer::Customer;

// ============================================================================
// Customer Store - Durable Keyed Records
// ============================================================================
//
// The real deployment backs this with a document store carrying a unique
// index on email and a compound index on (tenant_id, customer_number).
// This module keeps the contract: a tagged save error distinguishing the
// uniqueness violation from everything else, point lookup by tenant and
// number, and tenant-scoped paged listing sorted by customer number.
//
// ============================================================================

/// Save rejection, tagged so callers can tell the constraint violation
/// apart from infrastructure trouble.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error("customer store unavailable")]
    Unavailable(#[source] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("customer store unavailable")]
    Unavailable(#[source] anyhow::Error),
}

/// One page of a tenant-scoped listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_number,
            page_size,
            total_elements: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persists a customer and returns it with its store-assigned id.
    /// Rejects the write with `SaveError::DuplicateEmail` when the email is
    /// already present anywhere in the store, regardless of tenant.
    async fn save(&self, customer: Customer) -> Result<Customer, SaveError>;

    /// Point lookup on the (tenant_id, customer_number) compound key.
    async fn find_by_tenant_and_number(
        &self,
        tenant_id: &str,
        customer_number: &str,
    ) -> Result<Option<Customer>, StoreError>;

    /// Tenant-scoped listing, ordered by customer number ascending, with
    /// 0-based page numbering. An unknown tenant yields an empty page.
    async fn find_all_by_tenant(
        &self,
        tenant_id: &str,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<Customer>, StoreError>;
}

/// In-process store honoring the same indexes and constraints as the real
/// document store.
pub struct InMemoryCustomerStore {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub(crate) async fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut Vec<Customer>),
    {
        f(&mut *self.customers.lock().await);
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn save(&self, mut customer: Customer) -> Result<Customer, SaveError> {
        let mut customers = self.customers.lock().await;

        // Unique email index spans all tenants.
        if customers.iter().any(|c| c.email == customer.email) {
            return Err(SaveError::DuplicateEmail);
        }

        customer.id = Some(Uuid::new_v4().to_string());
        customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_by_tenant_and_number(
        &self,
        tenant_id: &str,
        customer_number: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let customers = self.customers.lock().await;
        Ok(customers
            .iter()
            .find(|c| c.tenant_id == tenant_id && c.customer_number == customer_number)
            .cloned())
    }

    async fn find_all_by_tenant(
        &self,
        tenant_id: &str,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<Customer>, StoreError> {
        let customers = self.customers.lock().await;

        let mut matching: Vec<Customer> = customers
            .iter()
            .filter(|c| c.tenant_id == tenant_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.customer_number.cmp(&b.customer_number));

        let total_elements = matching.len();
        let items = matching
            .into_iter()
            .skip(page_number.saturating_mul(page_size))
            .take(page_size)
            .collect();

        Ok(Page {
            items,
            page_number,
            page_size,
            total_elements,
        })
    }
}
