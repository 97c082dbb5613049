//! Resort amenity directory.
//!
//! Maps free-text delivery addresses ("Beach - Umbrella B7", "Spa Suite")
//! to named amenities with real coordinates, and answers nearest-amenity
//! queries through an R-tree.  The simulators never read this; it feeds
//! map views and order summaries.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use dc_core::GeoPoint;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A 2-D `[lat, lon]` point with the index of its amenity.
#[derive(Clone)]
struct AmenityEntry {
    point: [f32; 2], // [lat, lon]
    index: usize,
}

impl RTreeObject for AmenityEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AmenityEntry {
    /// Squared Euclidean distance in lat/lon space.  Fine at resort scale.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Amenity ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amenity {
    pub name:     String,
    /// Lower-case keywords matched against delivery addresses.
    pub keywords: Vec<String>,
    pub geo:      GeoPoint,
}

impl Amenity {
    pub fn new(name: &str, keywords: &[&str], geo: GeoPoint) -> Self {
        Self {
            name:     name.to_string(),
            keywords: keywords.iter().map(|k| k.to_ascii_lowercase()).collect(),
            geo,
        }
    }
}

// ── AmenityDirectory ──────────────────────────────────────────────────────────

/// Read-only amenity table with keyword and spatial lookups.
pub struct AmenityDirectory {
    amenities: Vec<Amenity>,
    index:     RTree<AmenityEntry>,
}

impl AmenityDirectory {
    pub fn new(amenities: Vec<Amenity>) -> Self {
        let entries = amenities
            .iter()
            .enumerate()
            .map(|(index, a)| AmenityEntry { point: [a.geo.lat, a.geo.lon], index })
            .collect();
        Self {
            amenities,
            index: RTree::bulk_load(entries),
        }
    }

    /// The amenities of the resort served by the portal.
    pub fn resort_default() -> Self {
        Self::new(vec![
            Amenity::new("Hotel Tower",      &["room", "suite", "floor"],        GeoPoint::new(20.6296, -87.0739)),
            Amenity::new("Infinity Pool",    &["pool", "cabana"],                GeoPoint::new(20.6289, -87.0731)),
            Amenity::new("Beach Umbrellas",  &["beach", "umbrella"],             GeoPoint::new(20.6281, -87.0722)),
            Amenity::new("Lobby Bar",        &["lobby", "bar"],                  GeoPoint::new(20.6299, -87.0745)),
            Amenity::new("Spa Garden",       &["spa", "garden", "massage"],      GeoPoint::new(20.6305, -87.0751)),
            Amenity::new("Tennis Courts",    &["tennis", "court"],               GeoPoint::new(20.6311, -87.0728)),
        ])
    }

    pub fn len(&self) -> usize {
        self.amenities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amenities.is_empty()
    }

    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    /// Match a delivery address against amenity keywords.
    ///
    /// Case-insensitive.  When several keywords occur in the address the
    /// longest one wins; ties go to the amenity listed first.
    pub fn lookup(&self, address: &str) -> Option<&Amenity> {
        let address = address.to_ascii_lowercase();
        let mut best: Option<(usize, &Amenity)> = None;
        for amenity in &self.amenities {
            for keyword in &amenity.keywords {
                if address.contains(keyword.as_str())
                    && best.is_none_or(|(len, _)| keyword.len() > len)
                {
                    best = Some((keyword.len(), amenity));
                }
            }
        }
        best.map(|(_, a)| a)
    }

    /// The amenity closest to `point`, or `None` for an empty directory.
    pub fn nearest(&self, point: GeoPoint) -> Option<&Amenity> {
        self.index
            .nearest_neighbor(&[point.lat, point.lon])
            .map(|e| &self.amenities[e.index])
    }
}
