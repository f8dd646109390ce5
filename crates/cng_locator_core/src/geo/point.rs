use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LocatorError, Result};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a point from a `[lng, lat]` pair as GeoJSON and OSRM emit them.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self::new(pair[1], pair[0])
    }

    /// `[lat, lng]` pair, the order the route-plan backend expects.
    pub fn to_lat_lng(self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Parse user text of the form `"lat, lng"`.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(LocatorError::InvalidInput(format!(
                "Invalid coordinates format: '{}' (expected \"lat, lng\")",
                input.trim()
            )));
        }

        let lat: f64 = parts[0].parse().map_err(|_| {
            LocatorError::InvalidInput(format!("Invalid latitude: '{}'", parts[0]))
        })?;
        let lng: f64 = parts[1].parse().map_err(|_| {
            LocatorError::InvalidInput(format!("Invalid longitude: '{}'", parts[1]))
        })?;

        let p = Self::new(lat, lng);
        if !p.is_valid() {
            return Err(LocatorError::InvalidInput(format!(
                "Coordinates out of range: {p} (lat must be in [-90, 90], lng in [-180, 180])"
            )));
        }
        Ok(p)
    }
}

impl FromStr for GeoPoint {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}
