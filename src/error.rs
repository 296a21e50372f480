//! Error taxonomy for the aggregation run.
//!
//! Every variant is fatal: a run either produces the full aggregated list or
//! one of these errors, never a partial result.

use thiserror::Error;

/// Errors surfaced to the caller by input handling and parsing.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Both or neither input source was chosen, or the chosen source held no
    /// networks at all.
    #[error("{0}")]
    InputSelection(String),

    /// The designated networks file could not be opened or read.
    #[error("can not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A token failed CIDR validation; the message names the token verbatim.
    #[error("bad IP network value: <{0}>")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_token() {
        let err = AggregateError::Parse("10.0.0.0/33".to_string());
        assert_eq!(err.to_string(), "bad IP network value: <10.0.0.0/33>");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = AggregateError::Io {
            path: "/tmp/missing.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("can not open /tmp/missing.txt"));
    }
}
