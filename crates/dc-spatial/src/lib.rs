//! `dc-spatial` — the schematic resort map and everything that reads it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`layout`]  | `ResortLayout`, `Landmark`, `MapLocation`, `Zone`           |
//! | [`route`]   | `RouteKind` selector, `Route`, `Router`, `WaypointRouter`   |
//! | [`amenity`] | `AmenityDirectory`: address lookup + R-tree nearest query  |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod amenity;
pub mod error;
pub mod layout;
pub mod route;

#[cfg(test)]
mod tests;

pub use amenity::{Amenity, AmenityDirectory};
pub use error::{SpatialError, SpatialResult};
pub use layout::{Landmark, LocationKind, MapLocation, ResortLayout, Zone, ZoneKind};
pub use route::{Route, RouteKind, Router, WaypointRouter};
