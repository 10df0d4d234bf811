//! Fill strategies for generating via candidate points in a bounded region.
//!
//! This module defines the common contract all strategies satisfy: given a
//! bounding region, a centre spacing, and a containment predicate, produce a
//! finite sequence of points that pass the predicate and respect the
//! spacing the strategy promises.
use rand::RngCore;

use crate::error::{Error, Result};
use crate::geom::{BoundingRange, Point};

pub mod bridson;
pub mod grid;
pub mod spatial;
pub mod star;

pub use bridson::{BridsonFillStrategy, CandidateMode};
pub use grid::GridFillStrategy;
pub use spatial::SpatialGrid;
pub use star::StarFillStrategy;

/// Geometric containment test a candidate point must pass.
///
/// Implemented for any `Fn(i64, i64) -> bool`, so callers usually hand in a
/// closure over their polygon geometry. The engine calls the predicate but
/// never stores it beyond strategy construction; it may be expensive, so
/// strategies keep cheap checks ahead of it.
pub trait ValidityPredicate: Send + Sync {
    fn contains(&self, x: i64, y: i64) -> bool;
}

impl<F> ValidityPredicate for F
where
    F: Fn(i64, i64) -> bool + Send + Sync,
{
    fn contains(&self, x: i64, y: i64) -> bool {
        self(x, y)
    }
}

/// Trait for fill point generation.
///
/// Each call is independent: strategies hold no state across calls, and for
/// a fixed random sequence the output is deterministic. Deterministic
/// strategies accept the rng and ignore it so the contract stays uniform.
pub trait FillStrategy: Send + Sync {
    fn generate_points(&self, rng: &mut dyn RngCore) -> Vec<Point>;
}

/// Shared construction parameters for all fill strategies.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillRegion {
    /// Bounding range along X in board units.
    pub x_range: BoundingRange,
    /// Bounding range along Y in board units.
    pub y_range: BoundingRange,
    /// Nominal minimum centre-to-centre distance in board units.
    pub centre_spacing: f64,
}

impl FillRegion {
    /// Create a new fill region.
    pub fn new(
        x_range: impl Into<BoundingRange>,
        y_range: impl Into<BoundingRange>,
        centre_spacing: f64,
    ) -> Self {
        Self {
            x_range: x_range.into(),
            y_range: y_range.into(),
            centre_spacing,
        }
    }

    /// Validates the region, returning an error for unusable spacing.
    ///
    /// Degenerate ranges are not an error; they yield empty output.
    pub fn validate(&self) -> Result<()> {
        if !self.centre_spacing.is_finite() || self.centre_spacing <= 0.0 {
            return Err(Error::InvalidConfig(
                "centre_spacing must be finite and > 0".into(),
            ));
        }
        Ok(())
    }

    /// Whether either axis range spans nothing.
    pub fn is_degenerate(&self) -> bool {
        self.x_range.is_empty() || self.y_range.is_empty()
    }
}

/// Closed set of fill patterns selectable by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillPattern {
    /// Regular square lattice.
    #[default]
    Grid,
    /// Offset lattice packing more points at equal minimum spacing.
    Star,
    /// Bridson Poisson-disc sampling.
    PoissonDisc,
}

/// Build the strategy for `pattern` behind a boxed [`FillStrategy`].
pub fn strategy_for<P>(
    pattern: FillPattern,
    region: FillRegion,
    predicate: P,
) -> Result<Box<dyn FillStrategy>>
where
    P: ValidityPredicate + 'static,
{
    Ok(match pattern {
        FillPattern::Grid => Box::new(GridFillStrategy::try_new(region, predicate)?),
        FillPattern::Star => Box::new(StarFillStrategy::try_new(region, predicate)?),
        FillPattern::PoissonDisc => Box::new(BridsonFillStrategy::try_new(region, predicate)?),
    })
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_values_in_range() {
        for value in [0, 1, 100, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..1.0).contains(&result),
                "rand01({value}) = {result} is out of range [0,1)"
            );
        }
    }

    #[test]
    fn region_validate_rejects_unusable_spacing() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let region = FillRegion::new((0, 10), (0, 10), spacing);
            assert!(region.validate().is_err(), "spacing {spacing} accepted");
        }
        assert!(FillRegion::new((0, 10), (0, 10), 1.0).validate().is_ok());
    }

    #[test]
    fn degenerate_region_is_flagged_but_valid() {
        let region = FillRegion::new((5, 5), (0, 10), 1.0);
        assert!(region.is_degenerate());
        assert!(region.validate().is_ok());
    }

    #[test]
    fn strategy_for_dispatches_all_patterns() {
        let mut rng = StdRng::seed_from_u64(1);
        for pattern in [FillPattern::Grid, FillPattern::Star, FillPattern::PoissonDisc] {
            let region = FillRegion::new((0, 1_000), (0, 1_000), 250.0);
            let strategy = strategy_for(pattern, region, |_: i64, _: i64| true).expect("valid region");
            assert!(!strategy.generate_points(&mut rng).is_empty());
        }
    }

    #[test]
    fn strategy_for_fails_fast_on_bad_spacing() {
        let region = FillRegion::new((0, 10), (0, 10), 0.0);
        assert!(strategy_for(FillPattern::Grid, region, |_: i64, _: i64| true).is_err());
    }

    #[test]
    fn default_pattern_is_grid() {
        assert_eq!(FillPattern::default(), FillPattern::Grid);
    }
}
