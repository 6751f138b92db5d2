//! `WallInspector` — the query surface over the simulation.

use tracing::debug;

use wall_core::{Day, ProfileNumber, WallConfig, WallLayout};
use wall_sim::{DayTable, NoopObserver, SimulationEngine};

use crate::{CostCalculator, InspectError, InspectResult, Query, QueryResponse};

/// Answers ice and cost questions about a wall.
///
/// Every query runs a fresh simulation from the initial layout, limited to
/// the day asked about.  Nothing is cached between queries.
#[derive(Clone, Debug)]
pub struct WallInspector {
    engine: SimulationEngine,
    costs:  CostCalculator,
}

impl WallInspector {
    /// Validate `config` and `layout`; fails before any simulation runs.
    pub fn new(config: WallConfig, layout: &WallLayout) -> InspectResult<Self> {
        let costs = CostCalculator::from_config(&config);
        let engine = SimulationEngine::new(config, layout)?;
        Ok(Self { engine, costs })
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn costs(&self) -> &CostCalculator {
        &self.costs
    }

    /// Simulate up to `day` (or to completion) and return the raw table.
    pub fn day_table(&self, day: Option<Day>) -> InspectResult<DayTable> {
        Ok(self.engine.run(day, &mut NoopObserver)?)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Ice used on `profile` on `day`.
    ///
    /// [`InspectError::InvalidDay`] if work was finished before `day`.
    pub fn get_ice_on_day(&self, profile: ProfileNumber, day: Day) -> InspectResult<f64> {
        let table = self.day_table(Some(day))?;
        let ice = self.costs.ice_on_day(&table, profile, day)?;
        debug!(profile = %profile, day = %day, ice, "ice on day");
        Ok(ice)
    }

    /// Cost of everything built on `profile` up to and including `day`.
    pub fn get_profile_cost_to_day(&self, profile: ProfileNumber, day: Day) -> InspectResult<f64> {
        let table = self.day_table(Some(day))?;
        let cost = self.costs.cost_to_day(&table, profile, day);
        debug!(profile = %profile, day = %day, cost, "profile cost to day");
        Ok(cost)
    }

    /// Cost of the whole wall up to `day`, or of the finished wall for
    /// `None`.
    pub fn get_full_cost(&self, day: Option<Day>) -> InspectResult<f64> {
        let table = self.day_table(day)?;
        let cost = self.costs.total_cost(&table);
        debug!(day = ?day.map(|d| d.0), days_simulated = table.len(), cost, "full cost");
        Ok(cost)
    }

    /// Run `query` and shape the result for a client.
    ///
    /// `InvalidDay` becomes a [`QueryResponse::Rejected`]; every other error
    /// is returned as-is.
    pub fn answer(&self, query: Query) -> InspectResult<QueryResponse> {
        let result = match query {
            Query::IceOnDay { profile, day } => self
                .get_ice_on_day(profile, day)
                .map(|ice_amount| QueryResponse::Ice { ice_amount, day }),
            Query::ProfileCost { profile, day } => self
                .get_profile_cost_to_day(profile, day)
                .map(|cost| QueryResponse::Cost { cost, day: Some(day) }),
            Query::FullCost { day } => self
                .get_full_cost(day)
                .map(|cost| QueryResponse::Cost { cost, day }),
        };
        match result {
            Err(InspectError::InvalidDay(day)) => Ok(QueryResponse::rejected(day)),
            other => other,
        }
    }
}
