//! Random layout generation.
//!
//! Produces layouts of the same shape the hand-made ones have: a handful of
//! profiles, each with anywhere from one to a few thousand sections, every
//! section somewhere between bare ground and the target height.  The same
//! seed always produces the same layout.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use wall_core::{Height, WallLayout};

use crate::{InputError, InputResult};

/// Shape of a generated layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorParams {
    /// Number of profiles.  Default: `3..=10`.
    pub profiles: RangeInclusive<usize>,
    /// Sections in each profile.  Default: `1..=3000`.
    pub sections_per_profile: RangeInclusive<usize>,
    /// Upper bound for initial heights (inclusive).  Default: 30.
    pub target_height: Height,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            profiles:             3..=10,
            sections_per_profile: 1..=3000,
            target_height:        30,
        }
    }
}

impl GeneratorParams {
    fn validate(&self) -> InputResult<()> {
        if self.profiles.is_empty() || *self.profiles.start() == 0 {
            return Err(InputError::Generator(format!(
                "profile range {:?} must be non-empty and start at 1 or more",
                self.profiles
            )));
        }
        if self.sections_per_profile.is_empty() || *self.sections_per_profile.start() == 0 {
            return Err(InputError::Generator(format!(
                "section range {:?} must be non-empty and start at 1 or more",
                self.sections_per_profile
            )));
        }
        Ok(())
    }
}

/// Generate a random layout from `params`, deterministically for `seed`.
pub fn generate_layout(params: &GeneratorParams, seed: u64) -> InputResult<WallLayout> {
    params.validate()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let profile_count = rng.gen_range(params.profiles.clone());

    let mut profiles: Vec<Vec<Height>> = Vec::with_capacity(profile_count);
    for _ in 0..profile_count {
        let section_count = rng.gen_range(params.sections_per_profile.clone());
        let heights = (0..section_count)
            .map(|_| rng.gen_range(0..=params.target_height))
            .collect();
        profiles.push(heights);
    }

    let layout = WallLayout::new(profiles);
    debug!(
        seed,
        profiles = layout.profile_count(),
        sections = layout.section_count(),
        "generated wall layout"
    );
    Ok(layout)
}
