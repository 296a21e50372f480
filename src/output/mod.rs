//! Output rendering for aggregated networks.
//!
//! - [`terminal`] - plain one-network-per-line output

mod terminal;

pub use terminal::{print_networks, write_networks};
