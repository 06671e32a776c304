//! Error types for CIDR parsing and JSON decoding.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CidrError>;

/// Errors returned by [`Cidr`](crate::Cidr) parsing and the [`json`](crate::json) codec.
#[derive(Error, Debug)]
pub enum CidrError {
    /// The text is not valid CIDR notation (bad address, bad prefix length or missing `/`).
    #[error("invalid CIDR address: {input}")]
    Parse {
        input: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    /// The JSON payload is malformed or has the wrong shape.
    #[error("invalid JSON at {path}: {source}")]
    Decode {
        /// JSON path of the failing value, `.` for the document root.
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CidrError {
    pub fn is_parse(&self) -> bool {
        matches!(self, CidrError::Parse { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CidrError::Decode { .. })
    }
}

impl From<serde_json::Error> for CidrError {
    fn from(source: serde_json::Error) -> Self {
        CidrError::Decode {
            path: ".".to_string(),
            source,
        }
    }
}
