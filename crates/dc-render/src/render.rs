//! Snapshot → frame.

use dc_core::Position;
use dc_mobility::{NavSnapshot, NavState, TimerSnapshot};
use dc_spatial::{LocationKind, MapLocation, ResortLayout, ZoneKind};

use crate::{Color, DrawCmd, Frame, MarkerKind, StrokeStyle};

const MARKER_RADIUS:  f32 = 8.0;
const COURIER_RADIUS: f32 = 10.0;
/// Pulse ring grows from `COURIER_RADIUS` by up to this much, then restarts.
const PULSE_SPAN:     u64 = 10;

/// Draw the navigation map for one snapshot.
///
/// Order: background, zones, planned route (dashed), location markers,
/// courier → destination line (dotted), courier marker, and the pulse ring
/// while navigating.
pub fn render_navigation(
    snapshot:  &NavSnapshot,
    locations: &[MapLocation],
    layout:    &ResortLayout,
) -> Frame {
    let mut frame = Frame::new(layout.width, layout.height, Color::BACKGROUND);

    for zone in &layout.zones {
        frame.push(DrawCmd::Rect {
            origin: zone.origin,
            width:  zone.width,
            height: zone.height,
            fill:   zone_color(zone.kind),
            label:  Some(zone.label.to_string()),
        });
    }

    frame.push(DrawCmd::Polyline {
        points: snapshot.route.points().to_vec(),
        color:  Color::ROUTE,
        width:  3.0,
        style:  StrokeStyle::Dashed,
    });

    for loc in locations {
        let kind = match loc.kind {
            LocationKind::Start       => MarkerKind::Start,
            LocationKind::Landmark    => MarkerKind::Landmark,
            LocationKind::Destination => MarkerKind::Destination,
        };
        frame.push(DrawCmd::Marker {
            kind,
            center: loc.position,
            radius: MARKER_RADIUS,
            label:  Some(loc.name.clone()),
        });
    }

    let destination = snapshot.route.destination();
    frame.push(DrawCmd::Polyline {
        points: vec![snapshot.position, destination],
        color:  Color::COURIER,
        width:  1.5,
        style:  StrokeStyle::Dotted,
    });

    frame.push(DrawCmd::Marker {
        kind:   MarkerKind::Courier,
        center: snapshot.position,
        radius: COURIER_RADIUS,
        label:  None,
    });

    if snapshot.state == NavState::Navigating {
        let phase = (snapshot.ticks % PULSE_SPAN) as f32;
        frame.push(DrawCmd::Ring {
            center:  snapshot.position,
            radius:  COURIER_RADIUS + phase,
            color:   Color::COURIER,
            opacity: 1.0 - phase / PULSE_SPAN as f32,
        });
    }

    frame.push(DrawCmd::Text {
        at:    Position::new(12.0, 24.0),
        text:  format!("{:.0}% · ETA {}", snapshot.progress, snapshot.eta_label()),
        color: Color::TEXT,
        size:  14.0,
    });

    frame
}

/// Draw the room-delivery status card: a progress bar, the phase line,
/// and elapsed time.
pub fn render_timer(snapshot: &TimerSnapshot) -> Frame {
    const WIDTH:  f32 = 320.0;
    const HEIGHT: f32 = 96.0;
    const BAR_X:  f32 = 16.0;
    const BAR_W:  f32 = WIDTH - 2.0 * BAR_X;

    let mut frame = Frame::new(WIDTH, HEIGHT, Color::BACKGROUND);
    frame.push(DrawCmd::Rect {
        origin: Position::new(BAR_X, 48.0),
        width:  BAR_W,
        height: 12.0,
        fill:   Color::TRACK,
        label:  None,
    });
    frame.push(DrawCmd::Rect {
        origin: Position::new(BAR_X, 48.0),
        width:  BAR_W * f32::from(snapshot.progress) / 100.0,
        height: 12.0,
        fill:   Color::ROUTE,
        label:  None,
    });

    let status = if snapshot.paused {
        format!("{} (paused)", snapshot.phase.label())
    } else {
        snapshot.phase.label().to_string()
    };
    frame.push(DrawCmd::Text {
        at:    Position::new(BAR_X, 32.0),
        text:  status,
        color: Color::TEXT,
        size:  14.0,
    });
    frame.push(DrawCmd::Text {
        at:    Position::new(BAR_X, 84.0),
        text:  format!(
            "{}% · {:02}:{:02}",
            snapshot.progress,
            snapshot.elapsed_secs / 60,
            snapshot.elapsed_secs % 60
        ),
        color: Color::TEXT,
        size:  12.0,
    });
    frame
}

fn zone_color(kind: ZoneKind) -> Color {
    match kind {
        ZoneKind::Building => Color::BUILDING,
        ZoneKind::Pool     => Color::POOL,
        ZoneKind::Beach    => Color::BEACH,
    }
}
