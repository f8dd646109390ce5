//! OSRM `route` service: request URL and response decoding.
//!
//! OSRM speaks GeoJSON, so every coordinate on the wire is `[lng, lat]`.
//! Everything past this module uses `lat, lng`.

use serde::Deserialize;

use crate::error::{LocatorError, Result};
use crate::geo::GeoPoint;
use crate::routing::Route;

pub const DEFAULT_ROUTER_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub geometry: Geometry,
    /// Seconds.
    pub duration: f64,
    /// Metres, as measured along the road network.
    #[serde(default)]
    pub distance: f64,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<[f64; 2]>,
}

/// `{base}/route/v1/driving/{lng1},{lat1};{lng2},{lat2}?overview=full&geometries=geojson`
pub fn route_url(base: &str, from: GeoPoint, to: GeoPoint) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
        base.trim_end_matches('/'),
        from.lng,
        from.lat,
        to.lng,
        to.lat
    )
}

/// Turn a decoded OSRM body into a [`Route`] using the first alternative.
pub fn into_route(resp: RouteResponse) -> Result<Route> {
    if resp.code != "Ok" {
        let detail = resp.message.unwrap_or(resp.code);
        return Err(LocatorError::Upstream(format!("No route found ({detail})")));
    }

    let first = resp
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| LocatorError::Upstream("No route found".to_string()))?;

    let points: Vec<GeoPoint> = first
        .geometry
        .coordinates
        .into_iter()
        .map(GeoPoint::from_lng_lat)
        .collect();

    let minutes = (first.duration / 60.0).round().max(0.0) as u32;

    Route::from_polyline(points, minutes)
}

/// Decode a raw OSRM body.
pub fn parse_route(body: &str) -> Result<Route> {
    let resp: RouteResponse = serde_json::from_str(body)?;
    into_route(resp)
}
