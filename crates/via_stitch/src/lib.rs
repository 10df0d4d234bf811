#![forbid(unsafe_code)]
//! via_stitch: via stitching planner with interchangeable fill strategies.
//!
//! Modules:
//! - geom: integer board-unit primitives (points, axis ranges)
//! - sampling: candidate generation (regular grid, offset star grid, Poisson disc)
//! - stitch: via planning on top of the fill strategies
//! - units: millimetre conversions for board-internal nanometre units
//!
//! The engine only proposes via centre points; turning them into physical
//! board objects (and any polygon algebra used to derive the placement
//! predicate) belongs to the surrounding tooling.
pub mod error;
pub mod geom;
pub mod sampling;
pub mod stitch;
pub mod units;

/// Convenient re-exports for common types. Import with `use via_stitch::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::{BoundingRange, Point};
    pub use crate::sampling::{
        strategy_for, BridsonFillStrategy, CandidateMode, FillPattern, FillRegion, FillStrategy,
        GridFillStrategy, StarFillStrategy, ValidityPredicate,
    };
    pub use crate::stitch::plan::StitchConfig;
    pub use crate::stitch::runner::{plan_vias, StitchResult};
    pub use crate::stitch::{partition_generated, Via, GENERATED_VIA_MARK};
    pub use crate::units::{from_mm, to_mm};
}
