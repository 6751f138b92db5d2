//! `ProgressLog` — a `SimObserver` that reports the run through `tracing`.

use tracing::{debug, info};

use wall_core::{Day, ProfileNumber, SectionNumber, TeamId};
use wall_sim::{DaySlice, SimObserver};

#[derive(Default)]
pub struct ProgressLog {
    sections_done: usize,
}

impl SimObserver for ProgressLog {
    fn on_run_start(&mut self, active_teams: usize, unfinished_sections: usize) {
        info!(active_teams, unfinished_sections, "construction started");
    }

    fn on_section_complete(&mut self, day: Day, team: TeamId, profile: ProfileNumber, section: SectionNumber) {
        self.sections_done += 1;
        debug!(day = %day, team = %team, profile = %profile, section = %section, "section complete");
    }

    fn on_day_end(&mut self, day: Day, feet: &DaySlice) {
        let built: u64 = feet.values().sum();
        debug!(day = %day, feet = built, sections_done = self.sections_done, "day finished");
    }

    fn on_run_end(&mut self, last_day: Option<Day>) {
        info!(last_day = ?last_day.map(|d| d.0), sections_done = self.sections_done, "construction stopped");
    }
}
