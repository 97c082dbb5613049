//! The static resort map.
//!
//! All coordinates are schematic canvas units on a 600 × 500 map: the hotel
//! building in the upper half, the pool in the lower middle, and the beach
//! strip along the bottom right.  Nothing here is geographic.

use dc_core::{LocationId, Position};

use crate::Route;

/// Canvas size of the schematic map.
pub const MAP_WIDTH:  f32 = 600.0;
pub const MAP_HEIGHT: f32 = 500.0;

/// Where every courier run begins: the resort kitchen.
pub const START: Position = Position::new(50.0, 350.0);
pub const START_NAME: &str = "Kitchen";

// ── Landmarks ─────────────────────────────────────────────────────────────────

/// Fixed reference points drawn on every map and used as route waypoints.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Landmark {
    Lobby,
    Elevator,
    PoolDeck,
    BeachAccess,
}

impl Landmark {
    pub const ALL: [Landmark; 4] = [
        Landmark::Lobby,
        Landmark::Elevator,
        Landmark::PoolDeck,
        Landmark::BeachAccess,
    ];

    pub fn position(self) -> Position {
        match self {
            Landmark::Lobby       => Position::new(150.0, 300.0),
            Landmark::Elevator    => Position::new(300.0, 200.0),
            Landmark::PoolDeck    => Position::new(300.0, 400.0),
            Landmark::BeachAccess => Position::new(420.0, 420.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Lobby       => "Main Lobby",
            Landmark::Elevator    => "Elevator Bank",
            Landmark::PoolDeck    => "Pool Deck",
            Landmark::BeachAccess => "Beach Access",
        }
    }
}

// ── MapLocation ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    Start,
    Destination,
    Landmark,
}

/// A labelled point on the map.
///
/// Built fresh for each session by [`ResortLayout::session_locations`] and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapLocation {
    pub id:       LocationId,
    pub name:     String,
    pub position: Position,
    pub kind:     LocationKind,
}

// ── Zones ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneKind {
    Building,
    Pool,
    Beach,
}

/// An axis-aligned background area.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub kind:   ZoneKind,
    pub label:  &'static str,
    /// Top-left corner.
    pub origin: Position,
    pub width:  f32,
    pub height: f32,
}

impl Zone {
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }
}

// ── ResortLayout ──────────────────────────────────────────────────────────────

/// The whole schematic map: canvas size, start point, landmarks, and
/// background zones.
#[derive(Clone, Debug)]
pub struct ResortLayout {
    pub width:  f32,
    pub height: f32,
    pub start:  Position,
    pub zones:  Vec<Zone>,
}

impl Default for ResortLayout {
    fn default() -> Self {
        Self::resort_default()
    }
}

impl ResortLayout {
    /// The one resort this portal serves.
    pub fn resort_default() -> Self {
        Self {
            width:  MAP_WIDTH,
            height: MAP_HEIGHT,
            start:  START,
            zones:  vec![
                Zone {
                    kind:   ZoneKind::Building,
                    label:  "Hotel",
                    origin: Position::new(120.0, 80.0),
                    width:  330.0,
                    height: 240.0,
                },
                Zone {
                    kind:   ZoneKind::Pool,
                    label:  "Pool",
                    origin: Position::new(240.0, 360.0),
                    width:  130.0,
                    height: 70.0,
                },
                Zone {
                    kind:   ZoneKind::Beach,
                    label:  "Beach",
                    origin: Position::new(400.0, 400.0),
                    width:  200.0,
                    height: 100.0,
                },
            ],
        }
    }

    /// Build the location list for one session.
    ///
    /// Contains exactly one `Start` (id 0), every landmark, and exactly one
    /// `Destination` named `destination_name` at the route's last point.
    pub fn session_locations(&self, route: &Route, destination_name: &str) -> Vec<MapLocation> {
        let mut locations = Vec::with_capacity(Landmark::ALL.len() + 2);
        locations.push(MapLocation {
            id:       LocationId(0),
            name:     START_NAME.to_string(),
            position: self.start,
            kind:     LocationKind::Start,
        });
        for (i, landmark) in Landmark::ALL.iter().enumerate() {
            locations.push(MapLocation {
                id:       LocationId(i as u16 + 1),
                name:     landmark.name().to_string(),
                position: landmark.position(),
                kind:     LocationKind::Landmark,
            });
        }
        locations.push(MapLocation {
            id:       LocationId(Landmark::ALL.len() as u16 + 1),
            name:     destination_name.to_string(),
            position: route.destination(),
            kind:     LocationKind::Destination,
        });
        locations
    }
}
