use dashmap::DashMap;

use crate::domain::customer::Customer;

// ============================================================================
// Customer Read Cache
// ============================================================================

/// Process-local cache from (tenant id, customer number) to customer.
///
/// Populated only on the single-customer read path. No TTL, no eviction, no
/// invalidation on write, no cross-instance coherence: once a customer is
/// cached, lookups keep returning that snapshot even if the backing store
/// changes out-of-band. The unbounded staleness window is the contract, not
/// an oversight.
pub struct CustomerCache {
    entries: DashMap<(String, String), Customer>,
}

impl CustomerCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn lookup(&self, tenant_id: &str, customer_number: &str) -> Option<Customer> {
        self.entries
            .get(&(tenant_id.to_string(), customer_number.to_string()))
            .map(|entry| entry.clone())
    }

    pub fn store(&self, customer: Customer) {
        self.entries.insert(
            (customer.tenant_id.clone(), customer.customer_number.clone()),
            customer,
        );
    }
}

impl Default for CustomerCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(tenant_id: &str, customer_number: &str) -> Customer {
        Customer {
            id: Some("id-1".to_string()),
            tenant_id: tenant_id.to_string(),
            customer_number: customer_number.to_string(),
            email: "email@example.com".to_string(),
            name: None,
            surname: None,
            phone_number: None,
            address: None,
        }
    }

    #[test]
    fn test_lookup_misses_until_stored() {
        let cache = CustomerCache::new();
        assert!(cache.lookup("t1", "00001").is_none());

        cache.store(customer("t1", "00001"));
        let hit = cache.lookup("t1", "00001").unwrap();
        assert_eq!(hit.customer_number, "00001");
    }

    #[test]
    fn test_keys_are_scoped_by_tenant() {
        let cache = CustomerCache::new();
        cache.store(customer("t1", "00001"));
        assert!(cache.lookup("t2", "00001").is_none());
    }
}
