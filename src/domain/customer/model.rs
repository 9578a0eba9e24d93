use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Model
// ============================================================================

/// Name of the shared counter that every registration draws from.
///
/// There is a single global sequence for all tenants: customer numbers are
/// globally unique, but a tenant will observe gaps in its own numbering.
pub const CUSTOMERS_SEQUENCE: &str = "customers_sequence";

/// A registered customer.
///
/// Immutable once persisted. `id` is assigned by the store on save; the
/// snapshot published in the registration event still has `id = None`.
/// `email` is unique across the entire store, not per tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<String>,
    pub tenant_id: String,
    pub customer_number: String,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<Address>,
}

/// Postal address owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

// ============================================================================
// Input Validation
// ============================================================================

/// Checks a tenant id against the allowed pattern `[A-Za-z0-9_-]+`.
pub fn ensure_valid_tenant_id(tenant_id: &str) -> Result<(), CustomerError> {
    let ok = !tenant_id.is_empty()
        && tenant_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if ok {
        Ok(())
    } else {
        Err(CustomerError::InvalidTenantId(tenant_id.to_string()))
    }
}

/// RFC-lite email check: non-blank, a single `@` with non-empty sides,
/// no whitespace, and a dot somewhere inside the domain part.
pub fn ensure_valid_email(email: &str) -> Result<(), CustomerError> {
    let invalid = || CustomerError::InvalidEmail(email.to_string());

    if email.trim().is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(|| invalid())?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tenant_ids() {
        for tenant in ["test-tenant", "tenant_42", "A", "0-0_0"] {
            assert!(ensure_valid_tenant_id(tenant).is_ok(), "{tenant}");
        }
    }

    #[test]
    fn test_invalid_tenant_ids() {
        for tenant in ["", "tenant!@#$", "white space", "über-tenant"] {
            assert!(
                matches!(
                    ensure_valid_tenant_id(tenant),
                    Err(CustomerError::InvalidTenantId(_))
                ),
                "{tenant}"
            );
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in ["email@example.com", "a.b+c@sub.domain.org"] {
            assert!(ensure_valid_email(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "   ",
            "no-at-sign",
            "@example.com",
            "user@",
            "user@nodot",
            "user@@example.com",
            "user@.com",
            "user name@example.com",
        ] {
            assert!(
                matches!(
                    ensure_valid_email(email),
                    Err(CustomerError::InvalidEmail(_))
                ),
                "{email}"
            );
        }
    }

    #[test]
    fn test_customer_serializes_with_camel_case_fields() {
        let customer = Customer {
            id: None,
            tenant_id: "test-tenant".to_string(),
            customer_number: "00001".to_string(),
            email: "email@example.com".to_string(),
            name: None,
            surname: None,
            phone_number: None,
            address: None,
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["tenantId"], "test-tenant");
        assert_eq!(json["customerNumber"], "00001");
        assert!(json["id"].is_null());
    }
}
