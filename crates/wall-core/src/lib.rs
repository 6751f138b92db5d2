//! `wall-core` — foundational types for the ice-wall construction simulator.
//!
//! This crate is a dependency of every other `wall-*` crate.  It has no
//! `wall-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `ProfileNumber`, `SectionNumber`, `TeamId`                |
//! | [`day`]    | `Day` — the simulation tick                               |
//! | [`config`] | `WallConfig` (target height, prices, team count, pacing)  |
//! | [`layout`] | `WallLayout` — initial section heights per profile        |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod day;
pub mod error;
pub mod ids;
pub mod layout;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WallConfig;
pub use day::Day;
pub use error::{CoreError, CoreResult};
pub use ids::{ProfileNumber, SectionNumber, TeamId};
pub use layout::{Height, WallLayout};
