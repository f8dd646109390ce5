use std::time::Instant;

use reqwest::blocking::Client;

use crate::api::RouteEngine;
use crate::api::http::RawResponse;
use crate::error::{LocatorError, Result};
use crate::geo::GeoPoint;
use crate::routing::Route;
use crate::routing::osrm::{parse_route, route_url};

/// OSRM-compatible routing engine.
pub struct OsrmClient {
    http: Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

impl RouteEngine for OsrmClient {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route> {
        let url = route_url(&self.base_url, from, to);
        let started = Instant::now();
        tracing::debug!(%url, "requesting driving route");

        let raw = RawResponse::read(self.http.get(&url).send()?)?;

        tracing::debug!(
            status = raw.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "routing engine answered"
        );

        if !raw.ok {
            return Err(LocatorError::Network(format!(
                "Route calculation failed (HTTP {})",
                raw.status
            )));
        }

        let route = parse_route(&raw.body)?;
        tracing::info!(
            points = route.points.len(),
            km = route.total_distance_km,
            minutes = route.duration_minutes,
            "route decoded"
        );
        Ok(route)
    }
}
