//! Regular square-lattice fill strategy.
use rand::RngCore;

use crate::error::Result;
use crate::geom::Point;
use crate::sampling::{FillRegion, FillStrategy, ValidityPredicate};

/// Deterministic regular lattice at the nominal centre spacing.
///
/// Spacing is a direct consequence of the lattice pitch and is not
/// re-validated per point; only the predicate filters candidates.
/// Candidates are rounded to the nearest board unit, ties away from zero.
#[derive(Debug, Clone)]
pub struct GridFillStrategy<P> {
    region: FillRegion,
    predicate: P,
}

impl<P: ValidityPredicate> GridFillStrategy<P> {
    /// Create a new grid strategy, rejecting unusable spacing.
    pub fn try_new(region: FillRegion, predicate: P) -> Result<Self> {
        region.validate()?;
        Ok(Self { region, predicate })
    }
}

impl<P: ValidityPredicate> FillStrategy for GridFillStrategy<P> {
    fn generate_points(&self, _rng: &mut dyn RngCore) -> Vec<Point> {
        let region = &self.region;
        if region.is_degenerate() {
            return Vec::new();
        }

        let spacing = region.centre_spacing;
        let x0 = region.x_range.min as f64;
        let y0 = region.y_range.min as f64;
        let x_steps = (region.x_range.span() as f64 / spacing) as u64 + 1;
        let y_steps = (region.y_range.span() as f64 / spacing) as u64 + 1;

        let mut points = Vec::new();
        for x_i in 0..x_steps {
            for y_i in 0..y_steps {
                let x = (x0 + x_i as f64 * spacing).round() as i64;
                let y = (y0 + y_i as f64 * spacing).round() as i64;
                if self.predicate.contains(x, y) {
                    points.push(Point::new(x, y));
                }
            }
        }

        points
    }
}
