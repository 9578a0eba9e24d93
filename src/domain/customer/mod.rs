pub mod errors;
pub mod events;
pub mod model;
pub mod number;
pub mod service;

// Re-export for convenience
pub use errors::*;
pub use events::*;
pub use model::*;
pub use number::*;
pub use service::*;
