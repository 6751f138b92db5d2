//! CSV report of a `DayTable`.
//!
//! One row per (day, profile) pair that saw work, in day then profile order:
//!
//! ```csv
//! day,profile,feet,ice,cost
//! 1,1,3,585,1111500
//! 2,1,2,390,741000
//! 2,2,1,195,370500
//! ```

use std::io::Write;
use std::path::Path;

use csv::Writer;
use wall_sim::DayTable;

use crate::{CostCalculator, InspectResult};

/// Write `table` as CSV to `writer`, with ice and cost priced by `costs`.
pub fn write_day_table<W: Write>(table: &DayTable, costs: &CostCalculator, writer: W) -> InspectResult<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(["day", "profile", "feet", "ice", "cost"])?;

    for (day, feet_by_profile) in table.iter() {
        for (profile, &feet) in feet_by_profile {
            csv_writer.write_record(&[
                day.to_string(),
                profile.to_string(),
                feet.to_string(),
                costs.ice_for_feet(feet).to_string(),
                costs.cost_for_feet(feet).to_string(),
            ])?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the report there.
pub fn write_day_table_file(table: &DayTable, costs: &CostCalculator, path: &Path) -> InspectResult<()> {
    let file = std::fs::File::create(path)?;
    write_day_table(table, costs, file)
}
