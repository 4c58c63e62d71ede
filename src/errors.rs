//! Errors reported by the command line front end.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("number of buttons must be a whole number: {0:?}")]
    InvalidButtons(String),
    #[error("number of buttons must not be negative: {0}")]
    NegativeButtons(i64),
    #[error("seconds per guess must be a non-negative number: {0:?}")]
    InvalidSecondsPerGuess(String),
    #[error("{buttons} buttons have too many combinations to estimate a time")]
    EstimateOverflow { buttons: u32 },
}

/// Parse a button count.  Negative counts are rejected here, as the lock
/// has no meaning for them.
pub fn parse_buttons(text: &str) -> Result<u32> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidButtons(text.to_string()))?;
    if value < 0 {
        return Err(Error::NegativeButtons(value));
    }
    if value > u32::MAX as i64 {
        return Err(Error::InvalidButtons(text.to_string()));
    }
    Ok(value as u32)
}

pub fn parse_seconds_per_guess(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(Error::InvalidSecondsPerGuess(text.to_string())),
    }
}
