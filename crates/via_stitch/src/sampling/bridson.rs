//! Bridson Poisson-disc fill strategy.
//!
//! Produces randomly placed points that are roughly uniformly spaced and
//! never closer than the centre spacing. A background [`SpatialGrid`] keeps
//! every neighbourhood query to a fixed kernel, so no pairwise scan is ever
//! needed.
use std::f64::consts::{SQRT_2, TAU};

use glam::DVec2;
use rand::RngCore;

use crate::error::Result;
use crate::geom::Point;
use crate::sampling::spatial::{CellState, SpatialGrid};
use crate::sampling::{rand01, FillRegion, FillStrategy, ValidityPredicate};

/// Attempts per cell seed and candidates per active point.
const ATTEMPTS: usize = 10;

/// How offspring candidates are placed around an active point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CandidateMode {
    /// Random angle with annulus-biased radius in `[spacing, 2 * spacing)`,
    /// the standard Bridson choice for disc packing.
    #[default]
    RandomAnnulus,
    /// Equally spaced directions at a fixed radius just over the spacing,
    /// rotated by a random phase per active point.
    SpacedRing,
}

/// Poisson-disc sampling over the fill region.
///
/// The scan visits grid cells in row-major order, seeds each unvisited cell
/// with up to [`ATTEMPTS`] random draws, and drains the active list fully
/// before moving on. Output order is the row-major cell scan of accepted
/// points, which is deterministic for a fixed random sequence.
#[derive(Debug, Clone)]
pub struct BridsonFillStrategy<P> {
    region: FillRegion,
    predicate: P,
    mode: CandidateMode,
}

impl<P: ValidityPredicate> BridsonFillStrategy<P> {
    /// Create a new Poisson-disc strategy, rejecting unusable spacing.
    pub fn try_new(region: FillRegion, predicate: P) -> Result<Self> {
        region.validate()?;
        Ok(Self {
            region,
            predicate,
            mode: CandidateMode::default(),
        })
    }

    /// Select how offspring candidates are generated.
    pub fn with_candidate_mode(mut self, mode: CandidateMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    fn cell_size(&self) -> f64 {
        self.region.centre_spacing / SQRT_2
    }

    /// Uniform random point inside the cell at `(cx, cy)`, quantized to
    /// board units.
    fn random_point_in_cell(&self, cx: usize, cy: usize, rng: &mut dyn RngCore) -> Point {
        let cell = self.cell_size();
        let x = self.region.x_range.min as f64 + (cx as f64 + rand01(rng)) * cell;
        let y = self.region.y_range.min as f64 + (cy as f64 + rand01(rng)) * cell;
        Point::new(x.round() as i64, y.round() as i64)
    }

    /// Candidate offspring around `base`, all drawn before any is validated
    /// so the random sequence does not depend on acceptance.
    fn candidates_around(&self, base: Point, rng: &mut dyn RngCore) -> Vec<Point> {
        let spacing = self.region.centre_spacing;
        let mut candidates = Vec::with_capacity(ATTEMPTS);
        match self.mode {
            CandidateMode::RandomAnnulus => {
                for _ in 0..ATTEMPTS {
                    let radius = (3.0 * rand01(rng) + 1.0).sqrt() * spacing;
                    let angle = rand01(rng) * TAU;
                    candidates.push(offset_from(base, radius, angle));
                }
            }
            CandidateMode::SpacedRing => {
                let radius = spacing + 2.0;
                let phase = rand01(rng) * TAU;
                for j in 0..ATTEMPTS {
                    let angle = TAU * j as f64 / ATTEMPTS as f64 + phase;
                    candidates.push(offset_from(base, radius, angle));
                }
            }
        }
        candidates
    }

    /// Full validity test for a candidate. Cheap structural checks come
    /// first; the caller-supplied predicate may be expensive and runs last.
    /// Returns the candidate's cell on success.
    fn is_valid(&self, grid: &SpatialGrid, candidate: Point) -> Option<(usize, usize)> {
        let (cx, cy) = grid.cell_of(candidate)?;
        if grid.occupant(cx, cy).is_some() {
            return None;
        }
        if grid.violates_spacing(cx, cy, candidate, self.region.centre_spacing) {
            return None;
        }
        if !self.predicate.contains(candidate.x, candidate.y) {
            return None;
        }
        Some((cx, cy))
    }
}

impl<P: ValidityPredicate> FillStrategy for BridsonFillStrategy<P> {
    fn generate_points(&self, rng: &mut dyn RngCore) -> Vec<Point> {
        let mut grid = SpatialGrid::new(self.region.x_range, self.region.y_range, self.cell_size());
        if grid.is_empty() {
            return Vec::new();
        }

        let mut active: Vec<Point> = Vec::new();
        for cy in 0..grid.y_steps() {
            for cx in 0..grid.x_steps() {
                if grid.state(cx, cy) != CellState::Unchecked {
                    continue;
                }

                // Seed this cell with up to ATTEMPTS random draws; a cell
                // that exhausts them stays empty for the rest of the run.
                for _ in 0..ATTEMPTS {
                    let seed = self.random_point_in_cell(cx, cy, rng);
                    if self.is_valid(&grid, seed).is_some() {
                        grid.occupy(cx, cy, seed);
                        active.push(seed);
                        break;
                    }
                }
                grid.mark_checked(cx, cy);

                // Drain the active list completely before the scan moves
                // on. LIFO: accepted offspring go straight back on top.
                while let Some(base) = active.pop() {
                    for candidate in self.candidates_around(base, rng) {
                        if let Some((ox, oy)) = self.is_valid(&grid, candidate) {
                            grid.occupy(ox, oy, candidate);
                            active.push(candidate);
                        }
                    }
                }
            }
        }

        grid.points().collect()
    }
}

/// `base` displaced by polar offset `(radius, angle)`, X from the sine and
/// Y from the cosine, quantized to board units.
fn offset_from(base: Point, radius: f64, angle: f64) -> Point {
    let offset = DVec2::new(angle.sin(), angle.cos()) * radius;
    let displaced = base.as_dvec2() + offset;
    Point::new(displaced.x.round() as i64, displaced.y.round() as i64)
}
