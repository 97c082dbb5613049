//! Route selection.
//!
//! Routes are canned, not planned: the destination string is classified
//! into a [`RouteKind`] by keyword, and each kind maps to a fixed list of
//! landmark waypoints plus a fixed drop-off point.
//!
//! # Precedence
//!
//! Keywords are checked case-sensitively in the order `"Room"`, `"Pool"`,
//! `"Beach"`; the first match wins.  `"Pool Room"` is therefore a room
//! delivery.  A string matching none of them gets the direct
//! [`RouteKind::Generic`] route.

use dc_core::Position;

use crate::{Landmark, ResortLayout, SpatialError, SpatialResult};

// ── RouteKind ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteKind {
    Room,
    Pool,
    Beach,
    Generic,
}

impl RouteKind {
    /// Keywords in match order.
    const KEYWORDS: [(&'static str, RouteKind); 3] = [
        ("Room",  RouteKind::Room),
        ("Pool",  RouteKind::Pool),
        ("Beach", RouteKind::Beach),
    ];

    /// Pick the route variant for a free-text destination.
    pub fn classify(destination: &str) -> RouteKind {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| destination.contains(keyword))
            .map(|&(_, kind)| kind)
            .unwrap_or(RouteKind::Generic)
    }

    /// Intermediate waypoints between the start and the drop-off.
    pub fn waypoints(self) -> &'static [Landmark] {
        match self {
            RouteKind::Room    => &[Landmark::Lobby, Landmark::Elevator],
            RouteKind::Pool    => &[Landmark::Lobby],
            RouteKind::Beach   => &[Landmark::BeachAccess],
            RouteKind::Generic => &[],
        }
    }

    /// The drop-off point for this kind of delivery.
    pub fn destination(self) -> Position {
        match self {
            RouteKind::Room    => Position::new(400.0, 150.0),
            RouteKind::Pool    => Position::new(330.0, 380.0),
            RouteKind::Beach   => Position::new(500.0, 450.0),
            RouteKind::Generic => Position::new(300.0, 250.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::Room    => "room",
            RouteKind::Pool    => "pool",
            RouteKind::Beach   => "beach",
            RouteKind::Generic => "generic",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered polyline from the start location to the destination.
///
/// Always holds at least two points; the first is the start and the last
/// is the destination.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    kind:   RouteKind,
    points: Vec<Position>,
}

impl Route {
    /// Build a route from explicit points.
    ///
    /// # Errors
    ///
    /// Fails on fewer than two points or any non-finite coordinate.
    pub fn from_points(kind: RouteKind, points: Vec<Position>) -> SpatialResult<Route> {
        if points.len() < 2 {
            return Err(SpatialError::DegenerateRoute(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SpatialError::NonFinitePoint { index });
        }
        Ok(Route { kind, points })
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; routes have at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Position {
        self.points[0]
    }

    pub fn destination(&self) -> Position {
        self.points[self.points.len() - 1]
    }

    /// Consecutive `(from, to)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total polyline length in map units.
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable route selection.
///
/// Implementations must be `Send + Sync` so one router can be shared by
/// every session the host creates.
pub trait Router: Send + Sync {
    /// Compute the route a courier takes to `destination`.
    fn route(&self, layout: &ResortLayout, destination: &str) -> Route;
}

/// The canned keyword router used by the courier portal.
#[derive(Copy, Clone, Debug, Default)]
pub struct WaypointRouter;

impl Router for WaypointRouter {
    fn route(&self, layout: &ResortLayout, destination: &str) -> Route {
        let kind = RouteKind::classify(destination);

        let mut points = Vec::with_capacity(kind.waypoints().len() + 2);
        points.push(layout.start);
        points.extend(kind.waypoints().iter().map(|l| l.position()));
        points.push(kind.destination());

        Route { kind, points }
    }
}
