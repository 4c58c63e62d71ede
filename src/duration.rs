//! Human readable durations.

use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};

const UNITS: [(&str, u64); 5] = [
    ("years", 60 * 60 * 24 * 365),
    ("days", 60 * 60 * 24),
    ("hours", 60 * 60),
    ("minutes", 60),
    ("seconds", 1),
];

/// Break a number of seconds into years, days, hours, minutes and seconds,
/// e.g. "1 hours, 1 minutes, 1 seconds".  Fractional seconds are dropped,
/// and units with a zero count are left out.
///
/// Negative and non-finite inputs are treated as zero.
pub fn format_duration(seconds: f64) -> String {
    let mut left = BigUint::from_f64(seconds.trunc()).unwrap_or_default();

    let mut parts = vec![];
    for &(name, size) in &UNITS {
        let size = BigUint::from(size);
        let value = &left / &size;
        if !value.is_zero() {
            parts.push(format!("{} {}", value, name));
            left %= size;
        }
    }

    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(", ")
    }
}
