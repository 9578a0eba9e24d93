// ============================================================================
// Customer Error Taxonomy
// ============================================================================

/// Errors surfaced by the registration service.
///
/// `InvalidTenantId` and `InvalidEmail` are caller errors raised before any
/// side effect. `DuplicateEmail` and `RegistrationFailed` come back from the
/// persistence layer after the registration event is already in flight.
/// `StoreUnavailable` is an infrastructure failure a caller may retry.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("invalid tenant id {0:?}: expected [A-Za-z0-9_-]+")]
    InvalidTenantId(String),

    #[error("invalid email address {0:?}")]
    InvalidEmail(String),

    #[error("failed to register customer: email is already in use")]
    DuplicateEmail,

    #[error("failed to register customer")]
    RegistrationFailed(#[source] anyhow::Error),

    #[error("customer {customer_number} not found in tenant {tenant_id}")]
    NotFound {
        tenant_id: String,
        customer_number: String,
    },

    #[error("customer store unavailable")]
    StoreUnavailable(#[source] anyhow::Error),
}
