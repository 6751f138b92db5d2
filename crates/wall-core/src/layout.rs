//! `WallLayout` — the initial height of every section, grouped by profile.

use crate::{CoreError, CoreResult, ProfileNumber, SectionNumber};

/// Height of a section, in feet.
pub type Height = u32;

/// Initial section heights, one inner `Vec` per profile, in input order.
///
/// Profile `n` is `profiles[n - 1]`; section `m` of that profile is
/// `profiles[n - 1][m - 1]`.  Heights are unsigned, so "negative height" is
/// rejected earlier, by whoever parses the raw input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WallLayout {
    profiles: Vec<Vec<Height>>,
}

impl WallLayout {
    pub fn new(profiles: Vec<Vec<Height>>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[Vec<Height>] {
        &self.profiles
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Total sections across all profiles (finished ones included).
    pub fn section_count(&self) -> usize {
        self.profiles.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.section_count() == 0
    }

    /// Every section in `(profile, section)` order with its initial height.
    ///
    /// Stops at the first profile or section whose number does not fit a
    /// `u32`; [`validate`][Self::validate] rejects such layouts.
    pub fn sections(&self) -> impl Iterator<Item = (ProfileNumber, SectionNumber, Height)> + '_ {
        self.profiles
            .iter()
            .enumerate()
            .map_while(|(p, heights)| Some((ProfileNumber::from_position(p)?, heights)))
            .flat_map(|(profile, heights)| {
                heights
                    .iter()
                    .enumerate()
                    .map_while(move |(s, &height)| Some((profile, SectionNumber::from_position(s)?, height)))
            })
    }

    /// Feet still to build before every section reaches `target`.
    ///
    /// Sections above `target` contribute nothing; [`validate`][Self::validate]
    /// rejects them anyway.
    pub fn total_deficit(&self, target: Height) -> u64 {
        self.sections()
            .map(|(_, _, height)| u64::from(target.saturating_sub(height)))
            .sum()
    }

    /// Check the layout against `target`.
    ///
    /// Fails if any height exceeds `target`, if profile or section counts
    /// do not fit their 32-bit numbers, or if the wall needs more than
    /// `u32::MAX` feet of work.
    pub fn validate(&self, target: Height) -> CoreResult<()> {
        if u32::try_from(self.profiles.len()).is_err() {
            return Err(CoreError::TooLarge { what: "profiles" });
        }
        if self.profiles.iter().any(|p| u32::try_from(p.len()).is_err()) {
            return Err(CoreError::TooLarge { what: "sections in one profile" });
        }
        if let Some((profile, section, height)) = self.sections().find(|&(_, _, height)| height > target) {
            return Err(CoreError::HeightAboveTarget { profile, section, height, target });
        }
        // Days of work never exceed feet of work.
        if self.total_deficit(target) > u64::from(u32::MAX) {
            return Err(CoreError::TooLarge { what: "feet of work" });
        }
        Ok(())
    }
}
