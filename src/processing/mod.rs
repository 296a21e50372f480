//! Network aggregation logic.
//!
//! This module contains the stages of the aggregation pipeline:
//! - [`dedup`] - token de-duplication and parsing
//! - [`absorb`] - removal of subnets contained in a larger network
//! - [`merge`] - fixpoint merge of sibling networks into supernets
//! - [`aggregate`] - the full sort/absorb/merge pipeline

mod absorb;
mod aggregate;
mod dedup;
mod merge;

// Re-export public functions
pub use absorb::absorb_subnets;
pub use aggregate::aggregate_networks;
pub use dedup::parse_unique_networks;
pub use merge::merge_to_fixpoint;
