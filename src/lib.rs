//! Aggregate IPv4 networks into the smallest equivalent set of prefixes.
//!
//! Larger networks absorb the subnets they contain, and sibling networks of
//! equal mask length merge into their shared supernet, repeatedly, until
//! nothing shrinks any further:
//!
//! ```text
//! 192.168.0.0/22 absorbs 192.168.0.0/24 and 192.168.2.0/24
//! 10.0.0.0/24 + 10.0.1.0/24 merge to 10.0.0.0/23
//! ```

pub mod cli;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use cli::InputConfig;
use error::AggregateError;
use models::Ipv4;

pub use processing::aggregate_networks;

/// Run the whole pipeline for the selected input source.
///
/// Reads tokens, de-duplicates and parses them, then aggregates. Any failure
/// aborts the run; no partial result is ever returned.
pub fn run(config: &InputConfig) -> Result<Vec<Ipv4>, AggregateError> {
    let tokens = input::read_tokens(config)?;
    let nets = processing::parse_unique_networks(&tokens)?;
    log::info!("aggregating {} networks", nets.len());

    let result = processing::aggregate_networks(nets);
    log::info!("{} networks remain after aggregation", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_from_string() {
        let config = InputConfig::NetsString("10.0.0.0/24 10.0.1.0/24".to_string());
        let result = run(&config).unwrap();
        assert_eq!(result, vec![Ipv4::new("10.0.0.0/23").unwrap()]);
    }

    #[test]
    fn test_run_aborts_on_bad_token() {
        let config = InputConfig::NetsString("10.0.0.0/24 10.0.0.0/33".to_string());
        let err = run(&config).unwrap_err();
        assert_eq!(err.to_string(), "bad IP network value: <10.0.0.0/33>");
    }
}
