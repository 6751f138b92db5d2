//! Simulation time model.
//!
//! Time is a 1-based `Day` counter.  Day 1 is the first day of work; there is
//! no day 0, and a query for it is answered as "never reached".  Each day every
//! working team adds exactly one foot to its section.

use std::fmt;

/// A simulation day, counted from 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Day(pub u32);

impl Day {
    /// The first simulated day.
    pub const FIRST: Day = Day(1);

    /// The day after `self`.
    ///
    /// A run never passes `u32::MAX` days: [`WallLayout::validate`] caps the
    /// feet of work at `u32::MAX`, and every simulated day builds at least
    /// one foot.
    ///
    /// [`WallLayout::validate`]: crate::WallLayout::validate
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
