//! Unit tests for dc-render.

use dc_mobility::{NavConfig, Navigator};
use dc_spatial::{MapLocation, ResortLayout, Router, WaypointRouter};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup(destination: &str) -> (ResortLayout, Vec<MapLocation>, Navigator) {
    let layout = ResortLayout::resort_default();
    let route = WaypointRouter.route(&layout, destination);
    let locations = layout.session_locations(&route, destination);
    let nav = Navigator::new(route, NavConfig::default()).unwrap();
    (layout, locations, nav)
}

#[cfg(test)]
mod navigation {
    use super::*;
    use crate::{DrawCmd, MarkerKind, StrokeStyle, render_navigation};

    #[test]
    fn render_is_pure() {
        let (layout, locs, mut nav) = setup("Room #215");
        nav.start();
        nav.tick();
        let snap = nav.snapshot();
        let a = render_navigation(&snap, &locs, &layout);
        let b = render_navigation(&snap, &locs, &layout);
        assert_eq!(a, b);
        assert_eq!(nav.snapshot(), snap, "rendering must not touch the simulation");
    }

    #[test]
    fn frame_starts_with_clear_and_has_all_zones() {
        let (layout, locs, nav) = setup("Beach - Umbrella B7");
        let frame = render_navigation(&nav.snapshot(), &locs, &layout);
        assert!(matches!(frame.commands[0], DrawCmd::Clear { .. }));
        let rects = frame.commands.iter().filter(|c| matches!(c, DrawCmd::Rect { .. })).count();
        assert_eq!(rects, layout.zones.len());
    }

    #[test]
    fn one_marker_per_location_plus_courier() {
        let (layout, locs, nav) = setup("Room #215");
        let frame = render_navigation(&nav.snapshot(), &locs, &layout);
        assert_eq!(frame.markers(MarkerKind::Start).count(), 1);
        assert_eq!(frame.markers(MarkerKind::Destination).count(), 1);
        assert_eq!(frame.markers(MarkerKind::Landmark).count(), 4);
        assert_eq!(frame.markers(MarkerKind::Courier).count(), 1);
    }

    #[test]
    fn planned_route_is_dashed_and_courier_line_dotted() {
        let (layout, locs, nav) = setup("Room #215");
        let snap = nav.snapshot();
        let frame = render_navigation(&snap, &locs, &layout);

        let lines: Vec<_> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Polyline { points, style, .. } => Some((points.clone(), *style)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (snap.route.points().to_vec(), StrokeStyle::Dashed));
        assert_eq!(lines[1], (vec![snap.position, snap.route.destination()], StrokeStyle::Dotted));
    }

    #[test]
    fn pulse_ring_only_while_navigating() {
        let has_ring = |f: &crate::Frame| f.commands.iter().any(|c| matches!(c, DrawCmd::Ring { .. }));

        let (layout, locs, mut nav) = setup("Pool Cabana 3");
        assert!(!has_ring(&render_navigation(&nav.snapshot(), &locs, &layout)));

        nav.start();
        nav.tick();
        assert!(has_ring(&render_navigation(&nav.snapshot(), &locs, &layout)));

        nav.pause();
        assert!(!has_ring(&render_navigation(&nav.snapshot(), &locs, &layout)));
    }

    #[test]
    fn courier_marker_follows_position() {
        let (layout, locs, mut nav) = setup("Room #215");
        nav.start();
        for _ in 0..10 {
            nav.tick();
        }
        let snap = nav.snapshot();
        let frame = render_navigation(&snap, &locs, &layout);
        let center = frame.markers(MarkerKind::Courier).find_map(|c| match c {
            DrawCmd::Marker { center, .. } => Some(*center),
            _ => None,
        });
        assert_eq!(center, Some(snap.position));
    }

    #[test]
    fn arrived_frame_is_finite() {
        let (layout, locs, mut nav) = setup("Spa");
        nav.start();
        for _ in 0..500 {
            nav.tick();
        }
        let frame = render_navigation(&nav.snapshot(), &locs, &layout);
        assert!(frame.positions().iter().all(|p| p.is_finite()));
    }
}

#[cfg(test)]
mod timer {
    use dc_mobility::{ProgressTimer, TimerConfig};

    use crate::{DrawCmd, render_timer};

    fn texts(frame: &crate::Frame) -> Vec<String> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bar_width_tracks_progress() {
        let mut t = ProgressTimer::new(TimerConfig::default()).unwrap();
        for _ in 0..10 {
            t.tick();
        }
        let frame = render_timer(&t.snapshot());
        let widths: Vec<f32> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 2);
        assert!((widths[1] - widths[0] * 0.5).abs() < 1e-3);
    }

    #[test]
    fn labels_show_phase_and_elapsed() {
        let mut t = ProgressTimer::new(TimerConfig::default()).unwrap();
        for _ in 0..16 {
            t.tick();
        }
        t.pause();
        let texts = texts(&render_timer(&t.snapshot()));
        assert_eq!(texts[0], "Approaching the room (paused)");
        assert_eq!(texts[1], "80% · 00:16");
    }
}

#[cfg(test)]
mod svg {
    use super::*;
    use crate::render_navigation;

    #[test]
    fn svg_document_contains_shapes() {
        let (layout, locs, nav) = setup("Room #215");
        let svg = render_navigation(&nav.snapshot(), &locs, &layout).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("stroke-dasharray=\"8 6\""));
        assert!(svg.contains("Room #215"));
    }

    #[test]
    fn svg_escapes_labels() {
        let (layout, locs, nav) = setup("Cabana <A&B>");
        let svg = render_navigation(&nav.snapshot(), &locs, &layout).to_svg();
        assert!(svg.contains("Cabana &lt;A&amp;B&gt;"));
        assert!(!svg.contains("<A&B>"));
    }
}
