//! `dc-mobility` — the two delivery-progress simulators.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`state`]     | `NavState`, `NavConfig`, `NavSnapshot`                          |
//! | [`navigator`] | `Navigator`, a marker walking toward a destination on a route    |
//! | [`timer`]     | `ProgressTimer`, `DeliveryPhase`, `TimerConfig`                 |
//! | [`error`]     | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Movement model
//!
//! Both simulators are stepped by their owner, one call to `tick()` per
//! timer firing; neither reads a clock.
//!
//! - The **navigator** moves the courier a fixed step in a straight line
//!   toward the destination each tick.  The route is drawn, not followed.
//!   Progress is derived from remaining distance and held below 100 until
//!   the courier comes within the arrival radius.
//! - The **progress timer** adds a fixed percentage each tick and moves
//!   through walking → approaching → arrived.
//!
//! ```text
//!            start            pause
//!   Idle ──────────► Navigating ◄──────► Paused
//!    ▲                   │        resume
//!    │ reset             │ distance < arrival_radius
//!    └──────────────  Arrived
//! ```

pub mod error;
pub mod navigator;
pub mod state;
pub mod timer;


pub use error::{MobilityError, MobilityResult};
pub use navigator::{NavTick, Navigator};
pub use state::{NavConfig, NavSnapshot, NavState};
pub use timer::{DeliveryPhase, ProgressTimer, TimerConfig, TimerSnapshot};
