//! Simplex lock combinatorics.
//!
//! Counts the combinations a simplex push button lock accepts, and estimates
//! how long trying them all would take.

#[macro_use]
extern crate log;

pub mod duration;
pub mod errors;
pub mod lock;
pub mod stirling;

pub use duration::format_duration;
pub use errors::{Error, Result};
pub use lock::Lock;
pub use stirling::StirlingCache;
