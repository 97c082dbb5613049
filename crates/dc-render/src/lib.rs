//! `dc-render` — turns simulator snapshots into display lists.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`frame`]  | `Frame`, `DrawCmd`, `Color`, `StrokeStyle`, `MarkerKind`      |
//! | [`render`] | `render_navigation`, `render_timer`                           |
//! | [`svg`]    | `Frame::to_svg`                                               |
//!
//! Rendering is a pure function of a snapshot: every frame starts with a
//! `Clear` and redraws the whole map, so nothing carries over between
//! frames and the simulation state is never touched.

pub mod frame;
pub mod render;
pub mod svg;

#[cfg(test)]
mod tests;

pub use frame::{Color, DrawCmd, Frame, MarkerKind, StrokeStyle};
pub use render::{render_navigation, render_timer};
