use serde::{Serialize, Serializer};

use crate::error::{LocatorError, Result};
use crate::geo::{GeoBounds, GeoPoint};
use crate::routing::segments::{RouteSegment, build_segments};

/// A driving route decomposed into great-circle segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub points: Vec<GeoPoint>,
    pub segments: Vec<RouteSegment>,
    pub total_distance_km: f64,
    pub duration_minutes: u32,
}

impl Route {
    /// Build a route from an ordered polyline (`lat, lng` points).
    pub fn from_polyline(points: Vec<GeoPoint>, duration_minutes: u32) -> Result<Self> {
        if points.len() < 2 {
            return Err(LocatorError::Upstream(format!(
                "Route needs at least 2 points (got {})",
                points.len()
            )));
        }

        let (segments, total_distance_km) = build_segments(&points);

        Ok(Self {
            points,
            segments,
            total_distance_km,
            duration_minutes,
        })
    }

    pub fn start(&self) -> GeoPoint {
        self.points[0]
    }

    pub fn end(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    pub fn bounds(&self) -> GeoBounds {
        // from_polyline guarantees at least two points
        let mut b = GeoBounds::from_point(self.start());
        for p in &self.points[1..] {
            b.extend(*p);
        }
        b
    }
}

#[derive(Serialize)]
struct RouteWire<'a> {
    coordinates: Vec<[f64; 2]>,
    distance: f64,
    duration: u32,
    segments: &'a [RouteSegment],
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        RouteWire {
            coordinates: self.points.iter().map(|p| p.to_lat_lng()).collect(),
            distance: self.total_distance_km,
            duration: self.duration_minutes,
            segments: &self.segments,
        }
        .serialize(s)
    }
}
