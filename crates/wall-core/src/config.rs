//! Top-level simulation configuration.

use std::time::Duration;

use crate::{CoreError, CoreResult, Height};

/// Simulation and pricing settings.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the engine.  Missing fields fall back to
/// [`WallConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WallConfig {
    /// Height at which a section is complete.  Default: 30.
    pub target_height: Height,

    /// Ice units consumed per foot of wall built.  Default: 195.
    pub ice_per_foot: f64,

    /// Monetary cost of one unit of ice.  Default: 1900.
    pub cost_per_ice_unit: f64,

    /// Teams available to the engine.  Must be at least 1.  Default: 20.
    pub number_of_teams: u32,

    /// Synthetic pause each team takes per day of work, in milliseconds.
    /// Has no effect on results.  Default: 0.
    pub day_pause_ms: u64,

    /// Worker thread cap for the per-day dispatch.  `None` runs one thread
    /// per active team.
    pub num_threads: Option<usize>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            target_height:     30,
            ice_per_foot:      195.0,
            cost_per_ice_unit: 1900.0,
            number_of_teams:   20,
            day_pause_ms:      0,
            num_threads:       None,
        }
    }
}

impl WallConfig {
    /// The per-day pause as a `Duration`.
    #[inline]
    pub fn day_pause(&self) -> Duration {
        Duration::from_millis(self.day_pause_ms)
    }

    /// Check every field; fails on the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.number_of_teams == 0 {
            return Err(CoreError::Config(
                "number_of_teams must be at least 1".to_owned(),
            ));
        }
        if !self.ice_per_foot.is_finite() || self.ice_per_foot < 0.0 {
            return Err(CoreError::Config(format!(
                "ice_per_foot must be a non-negative number, got {}",
                self.ice_per_foot
            )));
        }
        if !self.cost_per_ice_unit.is_finite() || self.cost_per_ice_unit < 0.0 {
            return Err(CoreError::Config(format!(
                "cost_per_ice_unit must be a non-negative number, got {}",
                self.cost_per_ice_unit
            )));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config(
                "num_threads must be at least 1 when set".to_owned(),
            ));
        }
        Ok(())
    }
}
