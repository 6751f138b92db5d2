//! `wall-sim` — the day loop for the ice-wall simulator.
//!
//! # Day loop
//!
//! ```text
//! queue  = SectionQueue(unfinished sections, sorted)
//! teams  = [WorkTeam(1..=N)], idle-at-birth teams dropped
//! for day in 1..:
//!   ① Dispatch — advance(day) for every working team, in parallel on a
//!                per-run Rayon pool.
//!   ② Barrier  — the parallel collect returns only once every team is done.
//!   ③ Apply    — sequentially, in ascending team order: count one foot per
//!                contribution into the day's profile map, report section
//!                completions and relieved teams to the observer.
//!   ④ Retire   — drop idle teams; stop at `up_to_day` or when none remain.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wall_core::{Day, WallConfig, WallLayout};
//! use wall_sim::{NoopObserver, SimulationEngine};
//!
//! let layout = WallLayout::new(vec![vec![21, 25, 28], vec![17]]);
//! let engine = SimulationEngine::new(WallConfig::default(), &layout)?;
//! let table  = engine.run(Some(Day(3)), &mut NoopObserver)?;
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod table;


pub use engine::SimulationEngine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use table::{DaySlice, DayTable};
