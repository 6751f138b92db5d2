//! `wall-work` — the units of work and the teams that do it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`section`] | `Section` — one piece of wall with its height and target  |
//! | [`queue`]   | `SectionQueue` — shared FIFO backlog with locked checkout |
//! | [`team`]    | `WorkTeam`, `Contribution`                                |
//! | [`error`]   | `WorkError`, `WorkResult<T>`                              |
//!
//! # Team lifecycle (summary)
//!
//! ```text
//! new()  ── checkout ok ──▶ Working(section) ──advance──▶ height += 1
//!   │                            ▲                            │
//!   │                            └──── checkout ok ◀── height == target
//!   │                                                          │
//!   └── queue empty ──▶ Idle ◀──────────── queue empty ◀───────┘
//! ```
//!
//! `Idle` is terminal.  Teams borrow the queue; they never own it.

pub mod error;
pub mod queue;
pub mod section;
pub mod team;


pub use error::{WorkError, WorkResult};
pub use queue::SectionQueue;
pub use section::Section;
pub use team::{Contribution, WorkTeam};
