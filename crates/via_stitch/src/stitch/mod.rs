//! Via planning on top of the fill strategies.
//!
//! This layer turns sampled points into plain via records for an external
//! placement step. It never mutates board state: vias leave as values, and
//! the cleanup pass only partitions a list the caller hands back in.
use tracing::info;

use crate::geom::Point;

pub mod plan;
pub mod runner;

/// Marker stamped on every via this planner produces, so a later cleanup
/// pass can identify and remove exactly those vias and nothing else.
pub const GENERATED_VIA_MARK: u32 = 33;

/// A planned through-via.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Via {
    /// Centre position in board units.
    pub position: Point,
    /// Copper diameter in board units.
    pub diameter: i64,
    /// Drill hole diameter in board units.
    pub drill: i64,
    /// Net the via belongs to.
    pub net: String,
    /// Origin marker; [`GENERATED_VIA_MARK`] for planner output.
    pub mark: u32,
}

impl Via {
    /// Whether this via carries the planner's marker.
    pub fn is_generated(&self) -> bool {
        self.mark == GENERATED_VIA_MARK
    }
}

/// Split a track list into vias to keep and the generated vias on `net`
/// that a cleanup pass should remove. Removal itself stays with the caller.
pub fn partition_generated(vias: Vec<Via>, net: &str) -> (Vec<Via>, Vec<Via>) {
    let (removed, kept): (Vec<Via>, Vec<Via>) = vias
        .into_iter()
        .partition(|via| via.net == net && via.is_generated());
    info!(
        "Selected {} generated vias on net '{}' for removal; keeping {}.",
        removed.len(),
        net,
        kept.len()
    );
    (kept, removed)
}
