//! CIDR network value with JSON string serialization.
//!
//! [`Cidr`] holds a network address and its mask. It is only ever built by
//! parsing CIDR notation, and it always stores the network itself: any host
//! bits present in the input are zeroed.

use crate::error::{CidrError, Result};
use ipnet::IpNet;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// A network prefix such as `10.1.0.0/16` or `2001:db8::/32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Copy, Clone)]
pub struct Cidr {
    net: IpNet,
}

impl Cidr {
    /// Parse `<ip>/<prefix-length>` into the network it denotes.
    ///
    /// # Examples
    /// ```
    /// use cloud_cidr::Cidr;
    /// let cidr = Cidr::parse("10.1.2.3/24").unwrap();
    /// assert_eq!(cidr.to_string(), "10.1.2.0/24");
    /// ```
    pub fn parse(s: &str) -> Result<Cidr> {
        let net = IpNet::from_str(s).map_err(|source| CidrError::Parse {
            input: s.to_string(),
            source,
        })?;
        let cidr = Cidr { net: net.trunc() };
        log::trace!("parsed {s} as {cidr}");
        Ok(cidr)
    }

    /// Parse a CIDR literal, panicking when it is invalid.
    ///
    /// # Panics
    /// Panics if `s` is not valid CIDR notation. Use [`Cidr::parse`] for any
    /// input that is not a constant in the source code.
    pub fn must_parse(s: &str) -> Cidr {
        Cidr::parse(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Byte-for-byte comparison of address and mask, same as `==`.
    pub fn equal(&self, other: &Cidr) -> bool {
        self == other
    }

    /// The network address (host bits zeroed).
    pub fn ip(&self) -> IpAddr {
        self.net.network()
    }

    /// The netmask, in the same address family as [`Cidr::ip`].
    pub fn mask(&self) -> IpAddr {
        self.net.netmask()
    }

    /// Number of leading one bits in the mask.
    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    /// Network address as 4 (IPv4) or 16 (IPv6) bytes.
    pub fn ip_bytes(&self) -> Vec<u8> {
        addr_bytes(self.ip())
    }

    /// Mask as 4 (IPv4) or 16 (IPv6) bytes.
    pub fn mask_bytes(&self) -> Vec<u8> {
        addr_bytes(self.mask())
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self.net, IpNet::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self.net, IpNet::V6(_))
    }

    /// Highest address of the range (all host bits set).
    pub fn broadcast(&self) -> IpAddr {
        self.net.broadcast()
    }

    /// Whether `addr` falls inside this network. Addresses of the other
    /// family are never contained.
    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.net.contains(addr)
    }

    pub fn as_ipnet(&self) -> &IpNet {
        &self.net
    }
}

fn addr_bytes(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(a) => a.octets().to_vec(),
        IpAddr::V6(a) => a.octets().to_vec(),
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Cidr> {
        Cidr::parse(s)
    }
}

impl TryFrom<&str> for Cidr {
    type Error = CidrError;

    fn try_from(s: &str) -> Result<Cidr> {
        Cidr::parse(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.ip(), self.prefix_len())
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::parse(&s).map_err(de::Error::custom)
    }
}
