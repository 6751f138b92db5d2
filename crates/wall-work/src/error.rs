use thiserror::Error;

use wall_core::{Height, ProfileNumber, SectionNumber, TeamId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkError {
    #[error(
        "team {team} was handed section {section} of profile {profile} \
         at height {height}, already at or above target {target}"
    )]
    SectionOverbuilt {
        team:    TeamId,
        profile: ProfileNumber,
        section: SectionNumber,
        height:  Height,
        target:  Height,
    },
}

pub type WorkResult<T> = Result<T, WorkError>;
