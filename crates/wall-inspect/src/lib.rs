//! `wall-inspect` — the questions people ask about the wall.
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`cost`]      | `CostCalculator` — ice and cost derived from a `DayTable`|
//! | [`inspector`] | `WallInspector` — one fresh simulation per query         |
//! | [`query`]     | `Query` (incl. route parsing), `QueryResponse`           |
//! | [`report`]    | CSV export of a `DayTable` with ice and cost columns     |
//! | [`error`]     | `InspectError`, `InspectResult<T>`                       |
//!
//! # Queries
//!
//! | Route                     | Method                                      |
//! |---------------------------|---------------------------------------------|
//! | `<profile>/days/<day>/`   | [`WallInspector::get_ice_on_day`]           |
//! | `<profile>/overview/<day>/` | [`WallInspector::get_profile_cost_to_day`] |
//! | `overview/<day>/`         | [`WallInspector::get_full_cost`]`(Some(day))` |
//! | `overview/`               | [`WallInspector::get_full_cost`]`(None)`    |
//!
//! Ice and cost are never stored: they are always `feet × ice_per_foot
//! [× cost_per_ice_unit]` over the table of a run.

pub mod cost;
pub mod error;
pub mod inspector;
pub mod query;
pub mod report;

#[cfg(test)]
mod tests;

pub use cost::CostCalculator;
pub use error::{InspectError, InspectResult};
pub use inspector::WallInspector;
pub use query::{Query, QueryResponse};
pub use report::{write_day_table, write_day_table_file};
