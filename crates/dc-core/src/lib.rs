//! `dc-core` — foundational types for the `daze_courier` delivery simulator.
//!
//! This crate is a dependency of every other `dc-*` crate.  It has no `dc-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `OrderId`, `LocationId`, `TaskId`                     |
//! | [`geo`]         | `Position` (schematic map units), `GeoPoint`          |
//! | [`time`]        | `Millis`, `SimClock`                                  |
//! | [`delivery`]    | `DeliveryType` host discriminator                     |
//! | [`error`]       | `CoreError`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod delivery;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use delivery::DeliveryType;
pub use error::CoreError;
pub use geo::{GeoPoint, Position};
pub use ids::{LocationId, OrderId, TaskId};
pub use time::{Millis, SimClock};
