//! `WorkTeam` — the per-worker state machine.

use std::thread;
use std::time::Duration;

use tracing::info;
use wall_core::{Day, ProfileNumber, SectionNumber, TeamId};

use crate::{Section, SectionQueue, WorkError, WorkResult};

/// What a team is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TeamState {
    /// Holding a section below target height.
    Working(Section),
    /// No section left to take.  Terminal.
    Idle,
}

/// The outcome of one team's day of work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub team:      TeamId,
    /// Profile that gained one foot.
    pub profile:   ProfileNumber,
    /// Set when this foot brought the section to target height.
    pub completed: Option<SectionNumber>,
    /// Set when the team then found the queue empty and went idle.
    pub relieved:  bool,
}

/// A team that raises one section by one foot per day, then pulls the next
/// section from the shared queue.
///
/// Teams are built by the engine with sequential ids and live for a single
/// run.  `WorkTeam` is `Send`, so a run can move `&mut` teams onto worker
/// threads; the queue behind the shared reference does its own locking.
pub struct WorkTeam<'q> {
    id:    TeamId,
    state: TeamState,
    queue: &'q SectionQueue,
    /// Synthetic effort per day.  Zero in tests.
    pause: Duration,
}

impl<'q> WorkTeam<'q> {
    /// Create a team and immediately try to check out its first section.
    ///
    /// A team that finds the queue empty is `Idle` from birth.
    pub fn new(id: TeamId, queue: &'q SectionQueue, pause: Duration) -> Self {
        let state = match queue.checkout() {
            Some(section) => TeamState::Working(section),
            None => {
                info!(team = %id, "work team relieved immediately (on day 1)");
                TeamState::Idle
            }
        };
        Self { id, state, queue, pause }
    }

    /// A team already holding `section`, bypassing checkout.
    #[cfg(test)]
    pub(crate) fn holding(id: TeamId, section: Section, queue: &'q SectionQueue) -> Self {
        Self { id, state: TeamState::Working(section), queue, pause: Duration::ZERO }
    }

    #[inline]
    pub fn id(&self) -> TeamId {
        self.id
    }

    #[inline]
    pub fn is_working(&self) -> bool {
        matches!(self.state, TeamState::Working(_))
    }

    /// Do one day of work.
    ///
    /// Returns `Ok(None)` for an idle team.  Otherwise the held section gains
    /// one foot and the returned [`Contribution`] names its profile; if the
    /// section reached target height the team checks out the next one, or
    /// goes idle when there is none.
    ///
    /// A held section already at target is reported as
    /// [`WorkError::SectionOverbuilt`] without touching state.  The queue
    /// only hands out sections below target and a team drops a section the
    /// day it completes, so this fires only on a broken invariant.
    pub fn advance(&mut self, day: Day) -> WorkResult<Option<Contribution>> {
        let TeamState::Working(section) = &mut self.state else {
            return Ok(None);
        };
        if section.is_complete() {
            return Err(WorkError::SectionOverbuilt {
                team:    self.id,
                profile: section.profile_number,
                section: section.section_number,
                height:  section.height,
                target:  section.target_height,
            });
        }

        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }

        section.height += 1;
        let mut contribution = Contribution {
            team:      self.id,
            profile:   section.profile_number,
            completed: None,
            relieved:  false,
        };
        if !section.is_complete() {
            return Ok(Some(contribution));
        }

        info!(
            team = %self.id,
            section = %section.section_number,
            profile = %section.profile_number,
            day = %day,
            "work team finished section"
        );
        contribution.completed = Some(section.section_number);

        match self.queue.checkout() {
            Some(next) => self.state = TeamState::Working(next),
            None => {
                info!(team = %self.id, day = %day, "work team relieved");
                self.state = TeamState::Idle;
                contribution.relieved = true;
            }
        }
        Ok(Some(contribution))
    }
}
