//! Byte-level JSON codec for a single [`Cidr`].

use crate::error::Result;
use crate::models::Cidr;

/// Decode a JSON string literal such as `"192.168.0.0/24"`.
///
/// A payload that is not a JSON string is a decode error; a string that is
/// not CIDR notation is a parse error.
///
/// # Examples
/// ```
/// use cloud_cidr::json::from_json;
/// let cidr = from_json(br#""192.168.0.7/24""#).unwrap();
/// assert_eq!(cidr.to_string(), "192.168.0.0/24");
/// assert!(from_json(b"123").unwrap_err().is_decode());
/// ```
pub fn from_json(b: &[u8]) -> Result<Cidr> {
    let s: String = serde_json::from_slice(b)?;
    Cidr::parse(&s)
}

/// Decode `b` into `cidr`. On error `cidr` keeps its previous value.
pub fn update_from_json(cidr: &mut Cidr, b: &[u8]) -> Result<()> {
    *cidr = from_json(b)?;
    Ok(())
}

/// Encode as a quoted JSON string of the canonical network form.
pub fn to_json(cidr: &Cidr) -> Vec<u8> {
    // CIDR text is plain ASCII, nothing to escape
    format!("\"{cidr}\"").into_bytes()
}
