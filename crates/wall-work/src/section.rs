//! `Section` — the unit a team works on.

use wall_core::{Height, ProfileNumber, SectionNumber, WallLayout};

/// One section of one profile.
///
/// `height <= target_height` always holds for sections handed out by a
/// [`SectionQueue`][crate::SectionQueue]; the team working it raises
/// `height` one foot per day until the two are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub profile_number: ProfileNumber,
    pub section_number: SectionNumber,
    pub height:         Height,
    pub target_height:  Height,
}

impl Section {
    pub fn new(
        profile_number: ProfileNumber,
        section_number: SectionNumber,
        height:         Height,
        target_height:  Height,
    ) -> Self {
        Self { profile_number, section_number, height, target_height }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.height >= self.target_height
    }

    /// Feet still to build.
    #[inline]
    pub fn remaining(&self) -> Height {
        self.target_height.saturating_sub(self.height)
    }

    /// Every section of `layout` still below `target`, in
    /// `(profile, section)` order.
    pub fn collect_unfinished(layout: &WallLayout, target: Height) -> Vec<Section> {
        layout
            .sections()
            .filter(|&(_, _, height)| height < target)
            .map(|(profile, section, height)| Section::new(profile, section, height, target))
            .collect()
    }
}
