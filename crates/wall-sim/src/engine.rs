//! The `SimulationEngine` and its day loop.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use wall_core::{Day, TeamId, WallConfig, WallLayout};
use wall_work::{Contribution, Section, SectionQueue, WorkTeam};

use crate::{DaySlice, DayTable, SimError, SimObserver, SimResult};

/// Runs the wall-building simulation.
///
/// The engine holds only validated, immutable inputs: the configuration and
/// the list of unfinished sections.  Every call to [`run`][Self::run] builds
/// its own queue, teams and worker pool from those, so runs are independent
/// and the same inputs always produce the same [`DayTable`].
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    config:   WallConfig,
    /// Sections below target height, in `(profile, section)` order.
    sections: Vec<Section>,
}

impl SimulationEngine {
    /// Validate `config` and `layout` and prepare the section list.
    ///
    /// Fails with [`SimError::Config`] before any simulation work is done.
    pub fn new(config: WallConfig, layout: &WallLayout) -> SimResult<Self> {
        config.validate()?;
        layout.validate(config.target_height)?;
        let sections = Section::collect_unfinished(layout, config.target_height);
        Ok(Self { config, sections })
    }

    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Sections that will be worked in a full run.
    pub fn unfinished_sections(&self) -> &[Section] {
        &self.sections
    }

    /// Feet a full run builds.
    pub fn total_deficit(&self) -> u64 {
        self.sections.iter().map(|s| u64::from(s.remaining())).sum()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate from day 1 until every section is at target height, or until
    /// `up_to_day` has been simulated, whichever comes first.
    ///
    /// `Some(Day(0))` simulates nothing.  Calls observer hooks at every day
    /// boundary; use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(
        &self,
        up_to_day: Option<Day>,
        observer:  &mut O,
    ) -> SimResult<DayTable> {
        let queue = SectionQueue::new(self.sections.clone());
        let pause = self.config.day_pause();

        let mut teams: Vec<WorkTeam<'_>> = (1..=self.config.number_of_teams)
            .map(|n| WorkTeam::new(TeamId(n), &queue, pause))
            .filter(WorkTeam::is_working)
            .collect();

        debug!(
            teams = self.config.number_of_teams,
            active_teams = teams.len(),
            sections = queue.total(),
            feet_to_build = self.total_deficit(),
            up_to_day = ?up_to_day.map(|d| d.0),
            "starting wall simulation run"
        );
        observer.on_run_start(teams.len(), queue.total());

        let mut table = DayTable::new();
        if teams.is_empty() {
            observer.on_run_end(None);
            return Ok(table);
        }
        let pool = self.build_pool(teams.len())?;

        let mut day = Day::FIRST;
        loop {
            if up_to_day.is_some_and(|limit| day > limit) {
                break;
            }

            observer.on_day_start(day, teams.len());
            let contributions = dispatch_day(&pool, &mut teams, day)?;
            let feet = apply_day(day, &contributions, observer);
            trace!(day = %day, active_teams = teams.len(), feet = ?feet, "day finished");

            observer.on_day_end(day, &feet);
            table.finalize_day(day, feet);

            teams.retain(WorkTeam::is_working);
            if up_to_day == Some(day) || teams.is_empty() {
                break;
            }
            day = day.next();
        }

        debug!(
            days = table.len(),
            feet = table.total_feet(),
            sections_left = queue.remaining(),
            "wall simulation run finished"
        );
        observer.on_run_end(table.last_day());
        Ok(table)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// One worker thread per active team, capped by `config.num_threads`.
    fn build_pool(&self, active_teams: usize) -> SimResult<ThreadPool> {
        let threads = self
            .config
            .num_threads
            .map_or(active_teams, |cap| cap.min(active_teams));
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("wall-team-{i}"))
            .build()?;
        Ok(pool)
    }
}

// ── Day phases ────────────────────────────────────────────────────────────────

/// Advance every team by one day in parallel.
///
/// Returns once every team has finished (the day barrier).  Results come
/// back in the order of `teams`, regardless of which thread finished first.
/// The first failure aborts the day and the run.  Idle teams are retired
/// before the next dispatch, so an idle team here is a broken invariant and
/// fails with [`SimError::IdleDispatch`].
pub(crate) fn dispatch_day(
    pool:  &ThreadPool,
    teams: &mut [WorkTeam<'_>],
    day:   Day,
) -> SimResult<Vec<Contribution>> {
    pool.install(|| {
        teams
            .par_iter_mut()
            .map(|team| {
                let id = team.id();
                team.advance(day)?.ok_or(SimError::IdleDispatch(id))
            })
            .collect()
    })
}

/// Fold a day's contributions into per-profile feet and report completion
/// events, sequentially.
fn apply_day<O: SimObserver>(
    day:           Day,
    contributions: &[Contribution],
    observer:      &mut O,
) -> DaySlice {
    let mut feet = DaySlice::new();
    for c in contributions {
        *feet.entry(c.profile).or_insert(0) += 1;
        if let Some(section) = c.completed {
            observer.on_section_complete(day, c.team, c.profile, section);
        }
        if c.relieved {
            observer.on_team_relieved(day, c.team);
        }
    }
    feet
}
