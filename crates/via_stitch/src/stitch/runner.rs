//! Runner that turns a stitching config and a region predicate into vias.
use rand::RngCore;
use tracing::{info, warn};

use crate::error::Result;
use crate::geom::BoundingRange;
use crate::sampling::{strategy_for, FillRegion, ValidityPredicate};
use crate::stitch::plan::StitchConfig;
use crate::stitch::{Via, GENERATED_VIA_MARK};

/// Result of planning a stitching run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct StitchResult {
    /// Planned vias, in the selected strategy's output order.
    pub vias: Vec<Via>,
}

/// Plan stitching vias over the bounding ranges.
///
/// `region` is the allowed-placement test, typically "inside the target
/// polygon after shrinking by [`StitchConfig::keepout_margin`]" as computed
/// by the external geometry layer. The selected fill strategy generates the
/// centre points; each becomes a via on the configured net, stamped with
/// [`GENERATED_VIA_MARK`]. Board state is never touched here.
pub fn plan_vias<P>(
    config: &StitchConfig,
    x_range: BoundingRange,
    y_range: BoundingRange,
    region: P,
    rng: &mut dyn RngCore,
) -> Result<StitchResult>
where
    P: ValidityPredicate + 'static,
{
    config.validate()?;

    let fill_region = FillRegion::new(x_range, y_range, config.step as f64);
    if fill_region.is_degenerate() {
        warn!("Stitching region spans nothing; no vias planned.");
        return Ok(StitchResult::default());
    }

    let strategy = strategy_for(config.pattern, fill_region, region)?;
    let points = strategy.generate_points(rng);

    info!(
        "Planned {} stitching vias on net '{}' ({:?} pattern).",
        points.len(),
        config.net,
        config.pattern
    );

    let vias = points
        .into_iter()
        .map(|position| Via {
            position,
            diameter: config.via_size,
            drill: config.drill,
            net: config.net.clone(),
            mark: GENERATED_VIA_MARK,
        })
        .collect();

    Ok(StitchResult { vias })
}
