//! `SectionQueue` — the shared backlog of unfinished sections.
//!
//! The backlog is materialized up front as a sorted `Vec<Section>`; a
//! mutex-guarded cursor marks the next section to hand out.  The lock is
//! never held for longer than one index read or increment.
//!
//! Sections are copied out on checkout.  The team owns its copy from then on;
//! the queue never sees it again.

use std::sync::{Mutex, PoisonError};

use crate::Section;

/// FIFO queue of unfinished sections, safe to share between team threads.
pub struct SectionQueue {
    sections: Vec<Section>,
    /// Index of the next section to hand out.
    cursor:   Mutex<usize>,
}

impl SectionQueue {
    /// Build a queue from `sections`.
    ///
    /// Complete sections are dropped and the rest sorted by
    /// `(profile_number, section_number)`, so callers may pass them in any
    /// order.
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.retain(|s| !s.is_complete());
        sections.sort_by_key(|s| (s.profile_number, s.section_number));
        Self {
            sections,
            cursor: Mutex::new(0),
        }
    }

    /// Take the next section, or `None` once the backlog is exhausted.
    ///
    /// Each section is returned exactly once across all callers.
    pub fn checkout(&self) -> Option<Section> {
        // A poisoned cursor is still a valid index.
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        let section = self.sections.get(*cursor).copied()?;
        *cursor += 1;
        Some(section)
    }

    /// Sections not yet checked out.
    pub fn remaining(&self) -> usize {
        let cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        self.sections.len() - *cursor
    }

    /// Sections the queue was built with (checked out or not).
    pub fn total(&self) -> usize {
        self.sections.len()
    }
}
