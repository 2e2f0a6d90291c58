//! `omikuji`: weighted discrete sampling over a fixed outcome set.
//!
//! Construct a [`WeightedSampler`] once from a list of outcomes and a
//! parallel list of probabilities; each draw then returns one outcome in
//! O(log N) via inverse-CDF binary search, with empirical frequencies
//! converging to the configured probabilities.
//!
//! ```
//! use omikuji::WeightedSampler;
//!
//! let die = WeightedSampler::new(vec!["common", "rare"], &[0.9, 0.1])?;
//! let face = die.next();
//! assert!(die.values().contains(face));
//! # Ok::<(), omikuji::WeightedSamplerError>(())
//! ```
//!
//! Validation is fail-fast: shape and probability errors surface at
//! construction, and draws are total thereafter.

#![forbid(unsafe_code)]

pub mod weighted;

pub use weighted::{WeightedSampler, WeightedSamplerError, SUM_TOLERANCE};
