//! Background grid for O(1) neighbourhood queries during Poisson-disc sampling.
//!
//! Cells are sized `centre_spacing / sqrt(2)` so at most one accepted point
//! fits per cell; two points inside one cell would already violate the
//! minimum spacing. That makes the one-occupant rule structural, and it is
//! what bounds the neighbour search to a fixed kernel instead of a scan of
//! every accepted point.
use crate::geom::{BoundingRange, Point};

/// Cell offsets whose occupants could sit closer than the minimum spacing
/// to a candidate in the centre cell: the eight immediate neighbours plus
/// the twelve extended cells at Chebyshev distance two. The four far
/// corners are excluded; their closest approach is already a full spacing
/// away.
const NEIGHBOUR_OFFSETS: [(i64, i64); 20] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-2, -1),
    (-2, 0),
    (-2, 1),
    (-1, 2),
    (0, 2),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, -1),
    (1, -2),
    (0, -2),
    (-1, -2),
];

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    /// Not yet visited by the outer scan.
    #[default]
    Unchecked,
    /// Visited, no point placed; never retried.
    Empty,
    /// Holds the single accepted point for this cell.
    Occupied(Point),
}

/// Uniform grid over a bounding region, stored as a flat row-major arena.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    x_min: i64,
    y_min: i64,
    cell_size: f64,
    x_steps: usize,
    y_steps: usize,
    cells: Vec<CellState>,
}

impl SpatialGrid {
    /// Create a grid covering the given ranges. Degenerate ranges, or a
    /// cell size larger than a range's span, yield a grid with no cells.
    pub fn new(x_range: BoundingRange, y_range: BoundingRange, cell_size: f64) -> Self {
        debug_assert!(cell_size.is_finite() && cell_size > 0.0);
        let x_steps = if x_range.is_empty() {
            0
        } else {
            (x_range.span() as f64 / cell_size) as usize
        };
        let y_steps = if y_range.is_empty() {
            0
        } else {
            (y_range.span() as f64 / cell_size) as usize
        };

        Self {
            x_min: x_range.min,
            y_min: y_range.min,
            cell_size,
            x_steps,
            y_steps,
            cells: vec![CellState::default(); x_steps * y_steps],
        }
    }

    /// Number of cells along X.
    pub fn x_steps(&self) -> usize {
        self.x_steps
    }

    /// Number of cells along Y.
    pub fn y_steps(&self) -> usize {
        self.y_steps
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, cx: usize, cy: usize) -> usize {
        cy * self.x_steps + cx
    }

    /// Cell coordinates containing `point`, or `None` outside the grid.
    pub fn cell_of(&self, point: Point) -> Option<(usize, usize)> {
        let cx = ((point.x - self.x_min) as f64 / self.cell_size).floor() as i64;
        let cy = ((point.y - self.y_min) as f64 / self.cell_size).floor() as i64;
        if cx < 0 || cx >= self.x_steps as i64 || cy < 0 || cy >= self.y_steps as i64 {
            return None;
        }
        Some((cx as usize, cy as usize))
    }

    /// Current state of the cell at `(cx, cy)`.
    pub fn state(&self, cx: usize, cy: usize) -> CellState {
        self.cells[self.index(cx, cy)]
    }

    /// The accepted point in the cell at `(cx, cy)`, if any.
    pub fn occupant(&self, cx: usize, cy: usize) -> Option<Point> {
        match self.state(cx, cy) {
            CellState::Occupied(p) => Some(p),
            _ => None,
        }
    }

    /// Mark the cell visited. An occupied cell stays occupied.
    pub fn mark_checked(&mut self, cx: usize, cy: usize) {
        let idx = self.index(cx, cy);
        if self.cells[idx] == CellState::Unchecked {
            self.cells[idx] = CellState::Empty;
        }
    }

    /// Store the accepted point for the cell. Occupying also counts as
    /// visited, so the outer scan never re-seeds this cell.
    pub fn occupy(&mut self, cx: usize, cy: usize, point: Point) {
        let idx = self.index(cx, cy);
        debug_assert!(
            !matches!(self.cells[idx], CellState::Occupied(_)),
            "cell ({cx}, {cy}) already occupied"
        );
        self.cells[idx] = CellState::Occupied(point);
    }

    /// Whether any neighbouring occupant lies within `min_spacing` of
    /// `candidate`, searching only the fixed offset kernel around the
    /// candidate's cell.
    pub fn violates_spacing(
        &self,
        cx: usize,
        cy: usize,
        candidate: Point,
        min_spacing: f64,
    ) -> bool {
        let min_spacing_squared = min_spacing * min_spacing;
        for (ox, oy) in NEIGHBOUR_OFFSETS {
            let nx = cx as i64 + ox;
            let ny = cy as i64 + oy;
            if nx < 0 || nx >= self.x_steps as i64 || ny < 0 || ny >= self.y_steps as i64 {
                continue;
            }
            if let Some(neighbour) = self.occupant(nx as usize, ny as usize) {
                if candidate.distance_squared(neighbour) < min_spacing_squared {
                    return true;
                }
            }
        }
        false
    }

    /// All accepted points in row-major cell order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().filter_map(|cell| match cell {
            CellState::Occupied(p) => Some(*p),
            _ => None,
        })
    }
}
