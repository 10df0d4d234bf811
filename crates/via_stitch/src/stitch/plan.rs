//! Configuration for a via stitching run.
use crate::error::{Error, Result};
use crate::sampling::FillPattern;
use crate::units::from_mm;

/// Parameters of a stitching run, in board units.
///
/// Defaults match common ground stitching: 2.54 mm step, 0.46 mm copper,
/// 0.20 mm drill, 0.2 mm clearance, net `GND`, regular grid pattern.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StitchConfig {
    /// Net the planned vias belong to.
    pub net: String,
    /// Fill pattern used to place via centres.
    pub pattern: FillPattern,
    /// Centre-to-centre step between vias in board units.
    pub step: i64,
    /// Via copper diameter in board units.
    pub via_size: i64,
    /// Via drill diameter in board units.
    pub drill: i64,
    /// Clearance from the via border to other copper in board units.
    pub clearance: i64,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            net: "GND".to_owned(),
            pattern: FillPattern::default(),
            step: from_mm(2.54),
            via_size: from_mm(0.46),
            drill: from_mm(0.20),
            clearance: from_mm(0.2),
        }
    }
}

impl StitchConfig {
    /// Creates a new config with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target net.
    pub fn with_net(mut self, net: impl Into<String>) -> Self {
        self.net = net.into();
        self
    }

    /// Sets the fill pattern.
    pub fn with_pattern(mut self, pattern: FillPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets the step between vias in millimetres.
    pub fn with_step_mm(mut self, mm: f64) -> Self {
        self.step = from_mm(mm);
        self
    }

    /// Sets the via copper diameter in millimetres.
    pub fn with_via_size_mm(mut self, mm: f64) -> Self {
        self.via_size = from_mm(mm);
        self
    }

    /// Sets the via drill diameter in millimetres.
    pub fn with_drill_mm(mut self, mm: f64) -> Self {
        self.drill = from_mm(mm);
        self
    }

    /// Sets the clearance in millimetres.
    pub fn with_clearance_mm(mut self, mm: f64) -> Self {
        self.clearance = from_mm(mm);
        self
    }

    /// Inflation the geometry layer applies to keep-outs when deriving the
    /// allowed-placement predicate: clearance plus half the copper
    /// diameter.
    pub fn keepout_margin(&self) -> i64 {
        self.clearance + self.via_size / 2
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            return Err(Error::InvalidConfig("step must be > 0".into()));
        }
        if self.via_size <= 0 {
            return Err(Error::InvalidConfig("via_size must be > 0".into()));
        }
        if self.drill <= 0 || self.drill > self.via_size {
            return Err(Error::InvalidConfig(
                "drill must be > 0 and no larger than via_size".into(),
            ));
        }
        if self.clearance < 0 {
            return Err(Error::InvalidConfig("clearance must be >= 0".into()));
        }
        if self.net.is_empty() {
            return Err(Error::InvalidConfig("net must not be empty".into()));
        }
        Ok(())
    }
}
