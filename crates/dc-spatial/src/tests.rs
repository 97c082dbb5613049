//! Unit tests for dc-spatial.

#[cfg(test)]
mod classify {
    use crate::RouteKind;

    #[test]
    fn keywords_map_to_kinds() {
        assert_eq!(RouteKind::classify("Room #215"), RouteKind::Room);
        assert_eq!(RouteKind::classify("Pool Cabana 3"), RouteKind::Pool);
        assert_eq!(RouteKind::classify("Beach - Umbrella B7"), RouteKind::Beach);
        assert_eq!(RouteKind::classify("Lobby Bar"), RouteKind::Generic);
    }

    #[test]
    fn room_wins_over_pool() {
        assert_eq!(RouteKind::classify("Pool Room"), RouteKind::Room);
        assert_eq!(RouteKind::classify("Beach Room 4"), RouteKind::Room);
        assert_eq!(RouteKind::classify("Beach Pool"), RouteKind::Pool);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(RouteKind::classify("room 12"), RouteKind::Generic);
        assert_eq!(RouteKind::classify("BEACH"), RouteKind::Generic);
    }

    #[test]
    fn empty_destination_is_generic() {
        assert_eq!(RouteKind::classify(""), RouteKind::Generic);
    }
}

#[cfg(test)]
mod routes {
    use dc_core::Position;

    use crate::{ResortLayout, Route, RouteKind, Router, SpatialError, WaypointRouter};

    fn route(dest: &str) -> Route {
        WaypointRouter.route(&ResortLayout::resort_default(), dest)
    }

    #[test]
    fn room_route_has_four_points() {
        let r = route("Room #215");
        assert_eq!(r.len(), 4);
        assert_eq!(r.start(), Position::new(50.0, 350.0));
        assert_eq!(r.destination(), Position::new(400.0, 150.0));
    }

    #[test]
    fn pool_route_has_three_points() {
        let r = route("Pool Cabana 3");
        assert_eq!(r.kind(), RouteKind::Pool);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn beach_route_ends_at_umbrellas() {
        let r = route("Beach - Umbrella B7");
        assert_eq!(r.len(), 3);
        assert_eq!(r.destination(), Position::new(500.0, 450.0));
    }

    #[test]
    fn unknown_destination_is_direct() {
        let r = route("Spa Garden");
        assert_eq!(r.len(), 2);
        assert_eq!(r.segments().count(), 1);
    }

    #[test]
    fn every_route_starts_at_layout_start() {
        let layout = ResortLayout::resort_default();
        for dest in ["Room 1", "Pool", "Beach", "Tennis"] {
            let r = WaypointRouter.route(&layout, dest);
            assert_eq!(r.start(), layout.start, "{dest}");
            assert_eq!(r.destination(), r.kind().destination(), "{dest}");
        }
    }

    #[test]
    fn length_sums_segments() {
        let r = route("Lobby");
        let direct = Position::new(50.0, 350.0).distance(Position::new(300.0, 250.0));
        assert!((r.length() - direct).abs() < 1e-3);
    }

    #[test]
    fn from_points_rejects_degenerate() {
        let err = Route::from_points(RouteKind::Generic, vec![Position::new(0.0, 0.0)]);
        assert!(matches!(err, Err(SpatialError::DegenerateRoute(1))));
    }

    #[test]
    fn from_points_rejects_nan() {
        let err = Route::from_points(
            RouteKind::Generic,
            vec![Position::new(0.0, 0.0), Position::new(f32::NAN, 1.0)],
        );
        assert!(matches!(err, Err(SpatialError::NonFinitePoint { index: 1 })));
    }
}

#[cfg(test)]
mod layout {
    use crate::{LocationKind, ResortLayout, Router, WaypointRouter, ZoneKind};

    #[test]
    fn session_locations_have_one_start_and_one_destination() {
        let layout = ResortLayout::resort_default();
        let route = WaypointRouter.route(&layout, "Room #215");
        let locs = layout.session_locations(&route, "Room #215");

        let starts = locs.iter().filter(|l| l.kind == LocationKind::Start).count();
        let dests: Vec<_> = locs.iter().filter(|l| l.kind == LocationKind::Destination).collect();
        assert_eq!(starts, 1);
        assert_eq!(dests.len(), 1);
        assert_eq!(dests[0].name, "Room #215");
        assert_eq!(dests[0].position, route.destination());
        assert_eq!(locs.len(), 6);
    }

    #[test]
    fn location_ids_are_distinct() {
        let layout = ResortLayout::resort_default();
        let route = WaypointRouter.route(&layout, "Beach");
        let locs = layout.session_locations(&route, "Beach");
        let mut ids: Vec<_> = locs.iter().map(|l| l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), locs.len());
    }

    #[test]
    fn destinations_sit_in_their_zones() {
        use crate::RouteKind;
        let layout = ResortLayout::resort_default();
        let zone = |k| layout.zones.iter().find(|z| z.kind == k).unwrap();
        assert!(zone(ZoneKind::Building).contains(RouteKind::Room.destination()));
        assert!(zone(ZoneKind::Pool).contains(RouteKind::Pool.destination()));
        assert!(zone(ZoneKind::Beach).contains(RouteKind::Beach.destination()));
    }
}

#[cfg(test)]
mod amenity {
    use dc_core::GeoPoint;

    use crate::{Amenity, AmenityDirectory};

    #[test]
    fn lookup_matches_keywords_case_insensitively() {
        let dir = AmenityDirectory::resort_default();
        assert_eq!(dir.lookup("Beach - Umbrella B7").unwrap().name, "Beach Umbrellas");
        assert_eq!(dir.lookup("ROOM #215").unwrap().name, "Hotel Tower");
        assert!(dir.lookup("Parking lot").is_none());
    }

    #[test]
    fn longest_keyword_wins() {
        let dir = AmenityDirectory::resort_default();
        // "cabana" (pool) is longer than "bar" (lobby bar).
        assert_eq!(dir.lookup("cabana bar").unwrap().name, "Infinity Pool");
    }

    #[test]
    fn nearest_uses_rtree() {
        let dir = AmenityDirectory::resort_default();
        let near_spa = GeoPoint::new(20.6306, -87.0752);
        assert_eq!(dir.nearest(near_spa).unwrap().name, "Spa Garden");
    }

    #[test]
    fn empty_directory() {
        let dir = AmenityDirectory::new(Vec::<Amenity>::new());
        assert!(dir.is_empty());
        assert!(dir.nearest(GeoPoint::new(0.0, 0.0)).is_none());
        assert!(dir.lookup("room").is_none());
    }
}
