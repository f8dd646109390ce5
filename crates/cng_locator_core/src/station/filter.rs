use serde::Serialize;

use crate::error::{LocatorError, Result};
use crate::geo::{GeoPoint, distance_km};
use crate::station::Station;

/// Anything that sits at a single position on the map.
pub trait Located {
    fn position(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

impl Located for Station {
    fn position(&self) -> GeoPoint {
        self.position
    }
}

/// Search boundary: a center and a radius in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusQuery {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl RadiusQuery {
    pub fn new(center: GeoPoint, radius_km: f64) -> Result<Self> {
        if !center.is_valid() {
            return Err(LocatorError::InvalidInput(format!(
                "Search center out of range: {center}"
            )));
        }
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(LocatorError::InvalidInput(format!(
                "Radius must be > 0 km (got {radius_km})"
            )));
        }
        Ok(Self { center, radius_km })
    }

    pub fn contains<T: Located>(&self, item: &T) -> bool {
        distance_km(self.center, item.position()) <= self.radius_km
    }
}

/// A station annotated with its distance from the search origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationHit {
    pub station: Station,
    pub distance_km: f64,
}

/// Keep items whose distance from `center` is `<= radius_km`, in input order.
pub fn filter_within_radius<T: Located + Clone>(items: &[T], center: GeoPoint, radius_km: f64) -> Vec<T> {
    items
        .iter()
        .filter(|it| distance_km(center, it.position()) <= radius_km)
        .cloned()
        .collect()
}

/// Ascending by distance from `origin`; equal distances keep their input order.
pub fn sort_by_distance<T: Located + Clone>(items: &[T], origin: GeoPoint) -> Vec<T> {
    let mut keyed: Vec<(f64, &T)> = items
        .iter()
        .map(|it| (distance_km(origin, it.position()), it))
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    keyed.into_iter().map(|(_, it)| it.clone()).collect()
}

/// Filter to the query radius, sort by distance and annotate each station.
pub fn nearby(stations: &[Station], query: &RadiusQuery) -> Vec<StationHit> {
    let inside = filter_within_radius(stations, query.center, query.radius_km);

    sort_by_distance(&inside, query.center)
        .into_iter()
        .map(|station| StationHit {
            distance_km: distance_km(query.center, station.position),
            station,
        })
        .collect()
}
