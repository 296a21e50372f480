//! Command-line argument definitions using clap derive.
//!
//! Flags are validated once into an [`InputConfig`] value which is then
//! passed into the library entry point; no global mutable configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::error::AggregateError;

const LONG_ABOUT: &str = "\
IPv4 networks aggregation.
Aggregates IPv4 networks from a given string or file with the following mechanic:
1. the largest prefix absorbs all its subnet prefixes,
   e.g. 10.0.0.0/16 absorbs 10.0.0.0/22, 10.10.0.0/24 and so on;
2. prefixes of the same length are merged into their supernet, whose prefix is one less,
   e.g. 10.0.0.0/24, 10.0.1.0/24 merge to 10.0.0.0/23,
   but 10.0.0.0/24, 10.0.2.0/24 do not merge to 10.0.0.0/22,
   because their closest /23 supernets are different.";

/// Aggregate IPv4 networks into the smallest equivalent prefix set.
#[derive(Parser, Debug)]
#[command(name = "ipv4-aggregate")]
#[command(version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Quoted string of networks separated by space
    #[arg(short, long)]
    pub string: Option<String>,

    /// Path to file which contains networks separated by new line
    #[arg(short, long)]
    pub filepath: Option<PathBuf>,
}

/// The single validated input source for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputConfig {
    /// Networks given inline, space separated.
    NetsString(String),
    /// Networks given one per line in a file.
    NetsFile(PathBuf),
}

impl TryFrom<Cli> for InputConfig {
    type Error = AggregateError;

    /// Arbitrate between the two sources: exactly one must be given.
    ///
    /// A flag whose value is empty or whitespace-only counts as not given.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let string = cli.string.filter(|s| !s.trim().is_empty());
        let filepath = cli
            .filepath
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty());

        match (string, filepath) {
            (Some(_), Some(_)) => Err(AggregateError::InputSelection(
                "both input options can not be used at the same time".to_string(),
            )),
            (None, None) => Err(AggregateError::InputSelection(
                "no input defined, choose string or file input".to_string(),
            )),
            (Some(s), None) => Ok(InputConfig::NetsString(s)),
            (None, Some(p)) => Ok(InputConfig::NetsFile(p)),
        }
    }
}
