use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, distance_km};

/// One leg of a polyline between two consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    #[serde(with = "lat_lng_pair")]
    pub start: GeoPoint,
    #[serde(with = "lat_lng_pair")]
    pub end: GeoPoint,
    #[serde(rename = "distance")]
    pub distance_km: f64,
}

/// Split a polyline into contiguous segments and sum their great-circle lengths.
///
/// Fewer than two points yield no segments and a zero total.
pub fn build_segments(points: &[GeoPoint]) -> (Vec<RouteSegment>, f64) {
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
    let mut total = 0.0;

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let d = distance_km(start, end);
        total += d;
        segments.push(RouteSegment {
            start,
            end,
            distance_km: d,
        });
    }

    (segments, total)
}

/// `[lat, lng]` arrays on the wire.
pub(crate) mod lat_lng_pair {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::geo::GeoPoint;

    pub fn serialize<S: Serializer>(p: &GeoPoint, s: S) -> Result<S::Ok, S::Error> {
        p.to_lat_lng().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<GeoPoint, D::Error> {
        let [lat, lng] = <[f64; 2]>::deserialize(d)?;
        Ok(GeoPoint::new(lat, lng))
    }
}
