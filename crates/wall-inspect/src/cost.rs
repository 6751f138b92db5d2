//! `CostCalculator` — pure ice and cost derivations.

use wall_core::{Day, ProfileNumber, WallConfig};
use wall_sim::DayTable;

use crate::{InspectError, InspectResult};

/// Converts feet from a [`DayTable`] into ice and money.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostCalculator {
    pub ice_per_foot:      f64,
    pub cost_per_ice_unit: f64,
}

impl CostCalculator {
    pub fn new(ice_per_foot: f64, cost_per_ice_unit: f64) -> Self {
        Self { ice_per_foot, cost_per_ice_unit }
    }

    pub fn from_config(config: &WallConfig) -> Self {
        Self::new(config.ice_per_foot, config.cost_per_ice_unit)
    }

    #[inline]
    pub fn ice_for_feet(&self, feet: u64) -> f64 {
        feet as f64 * self.ice_per_foot
    }

    #[inline]
    pub fn cost_for_feet(&self, feet: u64) -> f64 {
        self.ice_for_feet(feet) * self.cost_per_ice_unit
    }

    /// Ice used on `profile` on `day`.
    ///
    /// Fails with [`InspectError::InvalidDay`] if `day` is not in `table`.
    /// A simulated day on which nobody worked `profile` uses no ice.
    pub fn ice_on_day(&self, table: &DayTable, profile: ProfileNumber, day: Day) -> InspectResult<f64> {
        table
            .feet_on_day(day, profile)
            .map(|feet| self.ice_for_feet(feet))
            .ok_or(InspectError::InvalidDay(day))
    }

    /// Cost of everything built on `profile` up to and including `day`.
    ///
    /// Days past the end of the table add nothing; this never fails.
    pub fn cost_to_day(&self, table: &DayTable, profile: ProfileNumber, day: Day) -> f64 {
        self.cost_for_feet(table.profile_feet_through(profile, day))
    }

    /// Cost of everything in `table`, across all profiles.
    pub fn total_cost(&self, table: &DayTable) -> f64 {
        self.cost_for_feet(table.total_feet())
    }
}
