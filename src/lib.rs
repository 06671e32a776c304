//! JSON-serializable CIDR network values.
//!
//! [`Cidr`] wraps a network prefix (address + mask) parsed from CIDR
//! notation. It serializes as a JSON string such as `"10.1.0.0/16"` and can
//! be embedded in larger serde structures describing cloud resources.
//!
//! ```
//! use cloud_cidr::{json, Cidr};
//!
//! let cidr = Cidr::parse("10.1.2.3/16").unwrap();
//! assert_eq!(cidr.to_string(), "10.1.0.0/16");
//! assert_eq!(json::to_json(&cidr), br#""10.1.0.0/16""#);
//! assert_eq!(json::from_json(&json::to_json(&cidr)).unwrap(), cidr);
//! ```

pub mod error;
pub mod json;
pub mod models;

pub use error::{CidrError, Result};
pub use models::Cidr;
