//! Simulation observer trait for progress reporting and data collection.

use wall_core::{Day, ProfileNumber, SectionNumber, TeamId};

use crate::DaySlice;

/// Callbacks invoked by [`SimulationEngine::run`][crate::SimulationEngine::run]
/// at key points in the day loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks run on the thread that called
/// `run`, after the day's parallel phase has finished, in ascending team
/// order, so the sequence of calls is the same on every run.
///
/// # Example — completion counter
///
/// ```rust,ignore
/// struct Completions(usize);
///
/// impl SimObserver for Completions {
///     fn on_section_complete(&mut self, _: Day, _: TeamId, _: ProfileNumber, _: SectionNumber) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once teams have been built, before day 1.
    ///
    /// `active_teams` excludes teams that were idle at birth.
    fn on_run_start(&mut self, _active_teams: usize, _unfinished_sections: usize) {}

    /// Called at the start of each day, before dispatch.
    fn on_day_start(&mut self, _day: Day, _active_teams: usize) {}

    /// Called for every section brought to target height on `day`.
    fn on_section_complete(
        &mut self,
        _day:     Day,
        _team:    TeamId,
        _profile: ProfileNumber,
        _section: SectionNumber,
    ) {}

    /// Called when `team` found the queue empty after finishing a section.
    fn on_team_relieved(&mut self, _day: Day, _team: TeamId) {}

    /// Called once the day's results are final.
    fn on_day_end(&mut self, _day: Day, _feet: &DaySlice) {}

    /// Called once after the last simulated day (`None` if no day ran).
    fn on_run_end(&mut self, _last_day: Option<Day>) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
