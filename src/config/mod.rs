//! # Configuration Module
//!
//! The table has no runtime configuration; everything tunable is a constant
//! collected here so related values stay next to each other.
//!
//! - [`constants`]: capacities, cursor sentinels and text renderings

pub mod constants;
pub use constants::*;
