//! JSON encoding of CIDR values.
//!
//! - [`codec`] - single values to and from JSON bytes
//! - [`document`] - structures embedding CIDRs, with path-annotated errors

mod codec;
mod document;

pub use codec::{from_json, to_json, update_from_json};
pub use document::decode_document;
