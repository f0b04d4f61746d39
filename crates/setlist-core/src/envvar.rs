//! Environment variable parsing for configuration overrides.

use std::env;

use crate::error::{Error, Result};

/// Parses an optional float environment variable.
///
/// Missing or blank variables yield `None`; anything unparsable is a
/// [`Error::Config`].
pub fn parse_f64_env(key: &str) -> Result<Option<f64>> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} is not a number: {:?}", key, raw))),
        Err(_) => Ok(None),
    }
}
