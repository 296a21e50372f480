//! Token source: turns the selected input into trimmed, non-empty tokens.

use std::fs;

use crate::cli::InputConfig;
use crate::error::AggregateError;

/// Read raw network tokens from the configured source.
///
/// String input is split on whitespace, file input on lines; every token is
/// trimmed and empties are dropped. Duplicate tokens are kept here and removed
/// later by the normalizer.
///
/// # Errors
/// * [`AggregateError::Io`] when the file can not be read.
/// * [`AggregateError::InputSelection`] when no tokens remain after trimming.
pub fn read_tokens(config: &InputConfig) -> Result<Vec<String>, AggregateError> {
    let tokens: Vec<String> = match config {
        InputConfig::NetsString(s) => s.split_whitespace().map(String::from).collect(),
        InputConfig::NetsFile(path) => {
            let content = fs::read_to_string(path).map_err(|e| AggregateError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect()
        }
    };

    if tokens.is_empty() {
        return Err(AggregateError::InputSelection(
            "no networks found in input".to_string(),
        ));
    }

    log::debug!("read {} tokens from {:?}", tokens.len(), config);
    Ok(tokens)
}
