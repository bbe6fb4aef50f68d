//! `arena-track` — the kinematic model of observed opponents.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`track`]   | `BotTrack` — one opponent's pose/energy record, `by_energy`   |
//! | [`store`]   | `TrackStore` — name-keyed, insertion-ordered track collection |
//! | [`gravity`] | `GravityPoint` — weighted repulsion source, `net_force`       |
//! | [`error`]   | `TrackError`, `TrackResult<T>`                                |
//!
//! # Staleness discipline
//!
//! A track's stored fields describe the opponent *as last seen*; everything
//! relative to the owner (bearing, distance) is derived on demand from the
//! live owner pose, never cached.  Once an opponent dies its record is
//! pruned, and every name-keyed query afterwards fails with
//! [`TrackError::UnknownBot`] — stale geometry is an error, not a fallback.

pub mod error;
pub mod gravity;
pub mod store;
pub mod track;


pub use error::{TrackError, TrackResult};
pub use gravity::{net_force, GravityPoint};
pub use store::TrackStore;
pub use track::{by_energy, BotTrack};
