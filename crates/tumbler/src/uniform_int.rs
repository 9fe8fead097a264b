// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Unbiased integer sampling over an inclusive range.
use crate::error::RandError;
use crate::generator::BitGenerator;

/// Uniform distribution over the inclusive integer range `[lower, upper]`.
///
/// Sampling uses rejection against the largest multiple of the span that
/// fits in 64 bits, so every value in the range carries exactly equal
/// probability. Naive `sample % span` is skewed whenever the span does not
/// divide the generator's range evenly. The rejection probability is at
/// most `span / 2^64`, so the expected draw count stays at 1 + ε.
///
/// The invariant `lower <= upper` holds at all times; constructors and
/// setters reject violations with [`RandError::InvalidRange`] and leave the
/// previous bounds untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformIntDistribution {
    lower: i32,
    upper: i32,
}

impl Default for UniformIntDistribution {
    /// The full `i32` range.
    fn default() -> Self {
        Self {
            lower: i32::MIN,
            upper: i32::MAX,
        }
    }
}

impl UniformIntDistribution {
    /// Constructs a distribution over `[lower, upper]`.
    ///
    /// # Errors
    /// Returns [`RandError::InvalidRange`] when `lower > upper`.
    pub fn new(lower: i32, upper: i32) -> Result<Self, RandError> {
        if lower > upper {
            return Err(RandError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Inclusive lower bound.
    pub fn lower_bound(&self) -> i32 {
        self.lower
    }

    /// Inclusive upper bound.
    pub fn upper_bound(&self) -> i32 {
        self.upper
    }

    /// Replaces the lower bound.
    ///
    /// # Errors
    /// Returns [`RandError::InvalidRange`] when `lower` exceeds the current
    /// upper bound; the stored bounds are left unchanged.
    pub fn set_lower_bound(&mut self, lower: i32) -> Result<(), RandError> {
        if lower > self.upper {
            return Err(RandError::InvalidRange {
                lower,
                upper: self.upper,
            });
        }
        self.lower = lower;
        Ok(())
    }

    /// Replaces the upper bound.
    ///
    /// # Errors
    /// Returns [`RandError::InvalidRange`] when `upper` falls below the
    /// current lower bound; the stored bounds are left unchanged.
    pub fn set_upper_bound(&mut self, upper: i32) -> Result<(), RandError> {
        if upper < self.lower {
            return Err(RandError::InvalidRange {
                lower: self.lower,
                upper,
            });
        }
        self.upper = upper;
        Ok(())
    }

    /// Draws one value uniformly from `[lower, upper]`.
    pub fn sample<G: BitGenerator + ?Sized>(&self, generator: &mut G) -> i32 {
        let range = self.upper.wrapping_sub(self.lower) as u32;
        self.lower.wrapping_add(bounded_draw(generator, range) as i32)
    }

    /// Draws one value uniformly from `[lower, upper]` without constructing
    /// a distribution.
    ///
    /// # Errors
    /// Returns [`RandError::InvalidRange`] when `lower > upper`.
    pub fn sample_range<G: BitGenerator + ?Sized>(
        generator: &mut G,
        lower: i32,
        upper: i32,
    ) -> Result<i32, RandError> {
        Ok(Self::new(lower, upper)?.sample(generator))
    }
}

/// Uniform draw from `[0, range]` (inclusive), where `range` is the span of
/// the target interval minus one.
fn bounded_draw<G: BitGenerator + ?Sized>(generator: &mut G, range: u32) -> u32 {
    if range == 0 {
        // Single outcome; no draw is consumed.
        return 0;
    }
    if range == u32::MAX {
        // Full 32-bit span: every word is already uniform.
        return generator.next_u32();
    }

    let span = u64::from(range) + 1;
    let buckets = u64::MAX / span;
    let limit = buckets * span;
    // Reject the biased tail above the largest multiple of `span`.
    let mut sample = generator.next_u64();
    while sample >= limit {
        sample = generator.next_u64();
    }
    (sample / buckets) as u32
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::xoroshiro::Xoroshiro128Plus;

    /// Counts draws so tests can assert on consumption.
    struct Counting {
        inner: Xoroshiro128Plus,
        draws: usize,
    }

    impl BitGenerator for Counting {
        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }
    }

    #[test]
    fn negative_range_replays_reference_values() {
        let mut gen = Xoroshiro128Plus::from_state(123, 456);
        let dist = UniformIntDistribution::new(-10, -3).unwrap();
        let values: Vec<i32> = (0..6).map(|_| dist.sample(&mut gen)).collect();
        assert_eq!(values, vec![-9, -3, -9, -10, -3, -6]);
    }

    #[test]
    fn full_i32_span_uses_single_word_draws() {
        let mut gen = Xoroshiro128Plus::from_state(0xdead_beef, 0xface_feed);
        let dist = UniformIntDistribution::default();
        let values: Vec<i32> = (0..3).map(|_| dist.sample(&mut gen)).collect();
        assert_eq!(values, vec![1_946_982_111, -117_316_573, -2_106_359_689]);
    }

    #[test]
    fn equal_bounds_return_without_drawing() {
        let mut gen = Counting {
            inner: Xoroshiro128Plus::from_seed(1),
            draws: 0,
        };
        let dist = UniformIntDistribution::new(7, 7).unwrap();
        assert_eq!(dist.sample(&mut gen), 7);
        assert_eq!(gen.draws, 0);
    }

    #[test]
    fn constructor_rejects_inverted_bounds() {
        assert!(matches!(
            UniformIntDistribution::new(3, -3),
            Err(RandError::InvalidRange { lower: 3, upper: -3 })
        ));
    }

    #[test]
    fn rejected_setter_leaves_bounds_unchanged() {
        let mut dist = UniformIntDistribution::new(5, 10).unwrap();
        assert!(dist.set_upper_bound(3).is_err());
        assert_eq!(dist.lower_bound(), 5);
        assert_eq!(dist.upper_bound(), 10);

        assert!(dist.set_lower_bound(11).is_err());
        assert_eq!(dist.lower_bound(), 5);
        assert_eq!(dist.upper_bound(), 10);
    }

    #[test]
    fn setters_accept_valid_bounds() {
        let mut dist = UniformIntDistribution::new(5, 10).unwrap();
        dist.set_lower_bound(-5).unwrap();
        dist.set_upper_bound(5).unwrap();
        assert_eq!(dist.lower_bound(), -5);
        assert_eq!(dist.upper_bound(), 5);
    }

    #[test]
    fn sample_range_matches_distribution_sampling() {
        let mut a = Xoroshiro128Plus::from_seed(9);
        let mut b = Xoroshiro128Plus::from_seed(9);
        let dist = UniformIntDistribution::new(-100, 100).unwrap();
        for _ in 0..100 {
            assert_eq!(
                dist.sample(&mut a),
                UniformIntDistribution::sample_range(&mut b, -100, 100).unwrap()
            );
        }
    }
}
