//! `DayTable` — feet built per profile per day.
//!
//! Both levels are `BTreeMap`s, so iteration, equality and serialized output
//! are independent of the order in which teams finished their day.

use std::collections::BTreeMap;

use wall_core::{Day, ProfileNumber};

/// Feet built on one day, keyed by profile.  Profiles nobody worked on that
/// day are absent.
pub type DaySlice = BTreeMap<ProfileNumber, u64>;

/// The result of one simulation run: one [`DaySlice`] per simulated day.
///
/// Only days that were actually simulated are present, so `last_day()` is
/// the day the run stopped on.  Tables are built by the engine one finished
/// day at a time and are read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayTable {
    days: BTreeMap<Day, DaySlice>,
}

impl DayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished day.  Only the engine writes tables.
    pub(crate) fn finalize_day(&mut self, day: Day, feet: DaySlice) {
        self.days.insert(day, feet);
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn day(&self, day: Day) -> Option<&DaySlice> {
        self.days.get(&day)
    }

    /// Feet built on `profile` on `day`.
    ///
    /// `None` if `day` was not simulated; `Some(0)` if it was but nobody
    /// worked on `profile`.
    pub fn feet_on_day(&self, day: Day, profile: ProfileNumber) -> Option<u64> {
        self.day(day)
            .map(|feet| feet.get(&profile).copied().unwrap_or(0))
    }

    /// Feet built on `profile` over every simulated day up to and including
    /// `day`.
    pub fn profile_feet_through(&self, profile: ProfileNumber, day: Day) -> u64 {
        self.days
            .range(..=day)
            .filter_map(|(_, feet)| feet.get(&profile))
            .sum()
    }

    /// Feet built on every profile over the whole table.
    pub fn total_feet(&self) -> u64 {
        self.days.values().flat_map(|feet| feet.values()).sum()
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    pub fn last_day(&self) -> Option<Day> {
        self.days.keys().next_back().copied()
    }

    /// Number of simulated days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending order with their per-profile feet.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &DaySlice)> {
        self.days.iter().map(|(&day, feet)| (day, feet))
    }
}
