// ============================================================================
// Domain Layer
// ============================================================================
//
// Customer-specific business logic: the model, its validation rules, the
// lifecycle events, the error taxonomy, and the registration orchestrator.
// Infrastructure seams (stores, bus, cache) live outside this layer.
//
// ============================================================================

pub mod customer;
