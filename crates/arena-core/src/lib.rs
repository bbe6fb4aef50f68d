//! `arena-core` — foundational types for the `rust_arena` combat agent.
//!
//! This crate is a dependency of every other `arena-*` crate.  It
//! intentionally has no `arena-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `StateId`                                               |
//! | [`geom`]   | `Point2`, `Pose`, arena angle math                      |
//! | [`time`]   | `Tick`                                                  |
//! | [`events`] | `ScanEvent`, `SensorEvent`, `EventClass`, `Affinity`    |
//! | [`combat`] | bullet damage formula                                   |
//! | [`name`]   | `sanitize_name`                                         |
//! | [`rng`]    | `BotRng`                                                |
//! | [`config`] | `EngineConfig`                                          |
//! | [`error`]  | `ArenaError`, `ArenaResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and event types.  |

pub mod combat;
pub mod config;
pub mod error;
pub mod events;
pub mod geom;
pub mod ids;
pub mod name;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use combat::bullet_damage;
pub use config::EngineConfig;
pub use error::{ArenaError, ArenaResult};
pub use events::{Affinity, EventClass, ScanEvent, SensorEvent};
pub use geom::{normalize_absolute, normalize_relative, Point2, Pose};
pub use ids::StateId;
pub use name::sanitize_name;
pub use rng::BotRng;
pub use time::Tick;
