use thiserror::Error;
use wall_core::{CoreError, TeamId};
use wall_work::WorkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("team failed during the day: {0}")]
    Work(#[from] WorkError),

    #[error("team {0} was dispatched while idle")]
    IdleDispatch(TeamId),

    #[error("could not start the team worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
