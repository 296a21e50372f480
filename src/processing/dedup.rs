//! Token de-duplication and parsing.
//!
//! Turns raw input tokens into validated [`Ipv4`] networks, dropping exact
//! string duplicates first.

use itertools::Itertools;

use crate::error::AggregateError;
use crate::models::Ipv4;

/// De-duplicate tokens and parse each survivor as an IPv4 network.
///
/// String-level duplicates are removed with set semantics; the resulting
/// order does not matter because aggregation sorts. Value-level duplicates
/// (e.g. `10.0.0.0/24` and `10.0.0.7/24`, equal after normalization) may
/// remain and are removed by absorption, since a network contains itself.
///
/// # Errors
/// The first token failing CIDR validation aborts the whole run with
/// [`AggregateError::Parse`] naming that token; no partial list is produced.
pub fn parse_unique_networks<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Ipv4>, AggregateError> {
    let nets: Vec<Ipv4> = tokens
        .iter()
        .map(|t| t.as_ref())
        .unique()
        .map(Ipv4::new)
        .collect::<Result<_, _>>()?;

    log::debug!("parsed {} unique networks from {} tokens", nets.len(), tokens.len());
    Ok(nets)
}
