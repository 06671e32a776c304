//! Decoding of JSON documents that embed [`Cidr`](crate::Cidr) fields.

use crate::error::{CidrError, Result};
use serde::de::DeserializeOwned;

/// Deserialize a whole JSON document, reporting the path of the first bad field.
///
/// An invalid CIDR nested anywhere in the document surfaces as
/// [`CidrError::Decode`] with a path such as `networks[1].cidr`.
pub fn decode_document<T: DeserializeOwned>(b: &[u8]) -> Result<T> {
    let mut json_deserializer = serde_json::Deserializer::from_slice(b);
    let value: T = serde_path_to_error::deserialize(&mut json_deserializer).map_err(|e| {
        CidrError::Decode {
            path: e.path().to_string(),
            source: e.into_inner(),
        }
    })?;
    json_deserializer.end()?;

    log::debug!(
        "decoded {} from {} bytes of JSON",
        std::any::type_name::<T>(),
        b.len()
    );
    Ok(value)
}
