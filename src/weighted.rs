//! Weighted discrete sampling (inverse-CDF method).
//!
//! Given outcomes \( v_i \) and probabilities \( p_i \) with \( \sum p_i = 1 \),
//! partition \([0, 1)\) into contiguous half-open intervals of length \( p_i \)
//! in outcome order. A uniform draw \( r \) then selects the outcome whose
//! interval contains it: the smallest \( i \) with \( \mathrm{cum}[i] > r \).
//!
//! The cumulative boundaries are built once at construction with
//! Neumaier-compensated summation, so each boundary is the correctly-rounded
//! partial sum and a draw landing exactly on a boundary goes to the interval
//! that boundary *opens*, never the one it closes. The final boundary is
//! clamped to exactly 1.0, so every `r < 1.0` maps to a valid outcome.
//!
//! Notes:
//! - `next_with_rng` exists for deterministic testing/benchmarking; `next`
//!   is a convenience wrapper over `rand::rng()`.
//! - `index_from_uniform` (binary search) and `index_from_uniform_linear`
//!   (scan) must agree for every `r`; the scan is kept as a correctness
//!   reference and for benchmark comparison on small outcome sets.

use rand::prelude::*;

/// Maximum allowed deviation of the probability sum from 1.0.
///
/// Repeated floating-point addition rarely sums to exactly 1.0, so the
/// construction check is tolerance-based rather than exact.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Errors detected when constructing a [`WeightedSampler`].
///
/// All validation happens at construction; draws cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightedSamplerError {
    /// The outcome list is empty.
    Empty,
    /// Outcome count and probability count differ.
    ShapeMismatch { values: usize, probs: usize },
    /// A probability is NaN or infinite.
    NonFiniteProbability { index: usize, prob: f64 },
    /// A probability is negative.
    NegativeProbability { index: usize, prob: f64 },
    /// The probabilities do not sum to 1 within [`SUM_TOLERANCE`].
    ProbabilitySum(f64),
}

impl std::fmt::Display for WeightedSamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "outcome list must be non-empty"),
            Self::ShapeMismatch { values, probs } => write!(
                f,
                "outcome and probability counts must match (got {values} values, {probs} probabilities)"
            ),
            Self::NonFiniteProbability { index, prob } => {
                write!(f, "probability at index {index} must be finite (got {prob})")
            }
            Self::NegativeProbability { index, prob } => {
                write!(f, "probability at index {index} must be >= 0 (got {prob})")
            }
            Self::ProbabilitySum(sum) => {
                write!(f, "probabilities must sum to 1 within {SUM_TOLERANCE} (got {sum})")
            }
        }
    }
}

impl std::error::Error for WeightedSamplerError {}

/// Draws outcomes from a fixed set according to caller-supplied probabilities.
///
/// Construction validates the probability mass function once and precomputes
/// its cumulative distribution; each draw is then an O(log N) binary search.
/// Draws are i.i.d. — the sampler holds no mutable state, so `&self` draws
/// are safe to share across threads as long as each thread brings its own RNG.
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    values: Vec<T>,
    probs: Vec<f64>,
    cumulative: Vec<f64>,
}

impl<T> WeightedSampler<T> {
    /// Create a sampler over `values` with the given probabilities.
    ///
    /// `probs` must be the same length as `values`, with every entry finite
    /// and non-negative, summing to 1 within [`SUM_TOLERANCE`]. Zero-probability
    /// outcomes are permitted; they are simply never drawn.
    pub fn new(values: Vec<T>, probs: &[f64]) -> Result<Self, WeightedSamplerError> {
        if values.is_empty() {
            return Err(WeightedSamplerError::Empty);
        }
        if values.len() != probs.len() {
            return Err(WeightedSamplerError::ShapeMismatch {
                values: values.len(),
                probs: probs.len(),
            });
        }
        for (index, &prob) in probs.iter().enumerate() {
            if !prob.is_finite() {
                return Err(WeightedSamplerError::NonFiniteProbability { index, prob });
            }
            if prob < 0.0 {
                return Err(WeightedSamplerError::NegativeProbability { index, prob });
            }
        }

        // Neumaier-compensated prefix sums: each boundary is the
        // correctly-rounded partial sum, which the boundary tie-break
        // depends on when a draw lands exactly on a boundary.
        let mut cumulative = Vec::with_capacity(probs.len());
        let mut sum = 0.0_f64;
        let mut comp = 0.0_f64;
        for &prob in probs {
            let t = sum + prob;
            if sum.abs() >= prob.abs() {
                comp += (sum - t) + prob;
            } else {
                comp += (prob - t) + sum;
            }
            sum = t;
            cumulative.push(sum + comp);
        }

        let total = sum + comp;
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightedSamplerError::ProbabilitySum(total));
        }

        // Absorb the residual drift: every r < 1.0 must land inside the
        // last interval, never off the end.
        *cumulative.last_mut().unwrap() = 1.0;

        Ok(Self {
            values,
            probs: probs.to_vec(),
            cumulative,
        })
    }

    /// Create a sampler where every outcome is equally likely.
    ///
    /// Fails only if `values` is empty.
    pub fn uniform(values: Vec<T>) -> Result<Self, WeightedSamplerError> {
        let probs = vec![1.0 / values.len().max(1) as f64; values.len()];
        Self::new(values, &probs)
    }

    /// Draw one outcome using the thread-local RNG.
    #[inline]
    pub fn next(&self) -> &T {
        let mut rng = rand::rng();
        self.next_with_rng(&mut rng)
    }

    /// Draw one outcome using a caller-supplied RNG.
    ///
    /// This exists primarily for deterministic testing/benchmarking.
    #[inline]
    pub fn next_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let r: f64 = rng.random();
        &self.values[self.index_from_uniform(r)]
    }

    /// Map a uniform draw `r` in `[0, 1)` to an outcome index.
    ///
    /// Returns the smallest `i` with `cumulative[i] > r`, i.e. the half-open
    /// interval `[cumulative[i-1], cumulative[i])` containing `r`. A draw
    /// equal to a boundary belongs to the interval that boundary opens.
    #[inline]
    pub fn index_from_uniform(&self, r: f64) -> usize {
        debug_assert!((0.0..1.0).contains(&r), "uniform draw out of [0, 1): {r}");
        // The last boundary is exactly 1.0, so r < 1.0 always partitions
        // strictly inside; the min() only matters for out-of-range r.
        self.cumulative
            .partition_point(|&c| c <= r)
            .min(self.values.len() - 1)
    }

    /// Linear-scan equivalent of [`index_from_uniform`](Self::index_from_uniform).
    ///
    /// O(N) baseline; agrees with the binary search for every `r`. Faster in
    /// practice only for very small outcome sets.
    #[inline]
    pub fn index_from_uniform_linear(&self, r: f64) -> usize {
        debug_assert!((0.0..1.0).contains(&r), "uniform draw out of [0, 1): {r}");
        self.cumulative
            .iter()
            .position(|&c| c > r)
            .unwrap_or(self.values.len() - 1)
    }

    /// The outcome set, in construction order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The configured probability mass function.
    pub fn probabilities(&self) -> &[f64] {
        &self.probs
    }

    /// Cumulative boundaries for diagnostics/testing. The last entry is
    /// exactly 1.0.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects an empty outcome set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
