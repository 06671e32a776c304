//! Domain models.
//!
//! - [`Cidr`] - network prefix with JSON string serialization

mod cidr;

// Re-export public types
pub use cidr::Cidr;
