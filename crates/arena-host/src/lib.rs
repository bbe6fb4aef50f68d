//! `arena-host` — the seam between the decision core and the arena host.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`port`]     | `HostPort` trait — queries, actuation, event intake          |
//! | [`scripted`] | `ScriptedHost` — deterministic in-process host               |
//! | [`script`]   | CSV battle-script loader                                     |
//! | [`error`]    | `HostError`, `HostResult<T>`                                 |
//!
//! The real arena delivers sensor callbacks and accepts actuation calls; the
//! [`HostPort`] trait is that surface reduced to what the core consumes.
//! [`ScriptedHost`] implements it over a pre-written event script with crude
//! turn kinematics, which is enough to drive the whole decision core
//! end-to-end in tests and demos — the arena's real physics stay external.

pub mod error;
pub mod port;
pub mod script;
pub mod scripted;


pub use error::{HostError, HostResult};
pub use port::HostPort;
pub use script::{load_script_csv, load_script_reader};
pub use scripted::ScriptedHost;
