//! Domain models for IPv4 network aggregation.
//!
//! - [`Ipv4`] - network prefix with CIDR arithmetic (mask, containment,
//!   supernet)

mod ipv4;

// Re-export public types
pub use ipv4::{cidr_mask, cut_addr, Ipv4, MAX_LENGTH};
