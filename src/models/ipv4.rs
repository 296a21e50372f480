//! IPv4 network value and CIDR arithmetic.
//!
//! Provides the [`Ipv4`] struct representing a network prefix (address plus
//! mask length), along with the mask, containment and supernet primitives the
//! aggregation pipeline is built on.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::AggregateError;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_aggregate::models::cidr_mask;
/// assert_eq!(cidr_mask(24), 0xFFFFFF00);
/// ```
///
/// # Panics
/// Panics if `len` exceeds [`MAX_LENGTH`]; callers hold the mask invariant.
pub fn cidr_mask(len: u8) -> u32 {
    assert!(len <= MAX_LENGTH, "mask length {len} is too long");
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
///
/// Clears all host bits, e.g. `192.168.1.42/24` becomes `192.168.1.0`.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & cidr_mask(len))
}

/// IPv4 network in CIDR notation.
///
/// Invariant: `addr` never carries host bits for its `mask`; every value is
/// produced either by the normalizing parser or as a computed supernet.
/// Ordering is address first, then mask, so a larger block sharing a start
/// address sorts ahead of the blocks nested inside it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address, host bits cleared.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Host bits set in the literal are masked off rather than rejected, so
    /// `"10.0.0.7/24"` parses to `10.0.0.0/24`.
    ///
    /// # Errors
    /// [`AggregateError::Parse`] naming the token on malformed syntax, an
    /// octet outside 0-255 or a mask outside 0-32.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, AggregateError> {
        let token = addr_cidr.trim();
        let bad = || AggregateError::Parse(token.to_string());

        let (addr_part, mask_part) = token.split_once('/').ok_or_else(bad)?;
        let addr: Ipv4Addr = addr_part.parse().map_err(|_| bad())?;
        let mask: u8 = mask_part.parse().map_err(|_| bad())?;
        if mask > MAX_LENGTH {
            return Err(bad());
        }
        Ok(Ipv4 {
            addr: cut_addr(addr, mask),
            mask,
        })
    }

    /// True if `other` lies entirely inside this network.
    ///
    /// A network contains itself.
    pub fn contains(&self, other: &Ipv4) -> bool {
        self.mask <= other.mask
            && u32::from(other.addr) & cidr_mask(self.mask) == u32::from(self.addr)
    }

    /// The network one bit less specific that contains this one.
    ///
    /// Returns `None` for `0.0.0.0/0`, which has no parent.
    pub fn supernet(&self) -> Option<Ipv4> {
        if self.mask == 0 {
            return None;
        }
        let mask = self.mask - 1;
        Some(Ipv4 {
            addr: cut_addr(self.addr, mask),
            mask,
        })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !cidr_mask(self.mask))
    }
}

impl FromStr for Ipv4 {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}
