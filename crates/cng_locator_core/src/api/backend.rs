use std::time::Instant;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::api::http::RawResponse;
use crate::api::{RoutePlanner, StationSource};
use crate::error::{LocatorError, Result};
use crate::plan::{RefuelStop, RoutePlanRequest, parse_plan_response};
use crate::station::{RadiusQuery, Station};

/// Station search and route-plan backend.
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// `{base}/api/stations/{lat}/{lng}?radius={km}`
pub fn stations_url(base: &str, query: &RadiusQuery) -> String {
    format!(
        "{}/api/stations/{}/{}?radius={}",
        base.trim_end_matches('/'),
        query.center.lat,
        query.center.lng,
        query.radius_km
    )
}

pub fn route_plan_url(base: &str) -> String {
    format!("{}/api/route-plan", base.trim_end_matches('/'))
}

#[derive(Deserialize)]
struct StationsEnvelope {
    #[serde(default)]
    stations: Vec<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a station-search body. A non-empty `error` field wins even when
/// stations are present. Entries that do not decode (no position, wrong
/// types) are skipped rather than failing the whole list.
pub fn parse_stations_response(status_ok: bool, status: u16, body: &str) -> Result<Vec<Station>> {
    let env: StationsEnvelope = match serde_json::from_str(body) {
        Ok(env) => env,
        Err(_) if !status_ok => {
            return Err(LocatorError::Network(format!(
                "Error fetching nearby stations (HTTP {status})"
            )));
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(msg) = env.error.filter(|m| !m.trim().is_empty()) {
        return Err(LocatorError::Upstream(msg));
    }
    if !status_ok {
        return Err(LocatorError::Network(format!(
            "Error fetching nearby stations (HTTP {status})"
        )));
    }

    let stations = env
        .stations
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<Station>(raw) {
            Ok(station) => Some(station),
            Err(e) => {
                tracing::warn!(error = %e, "skipping undecodable station");
                None
            }
        })
        .collect();
    Ok(stations)
}

impl StationSource for BackendClient {
    fn fetch_stations(&self, query: &RadiusQuery) -> Result<Vec<Station>> {
        let url = stations_url(&self.base_url, query);
        let started = Instant::now();
        tracing::debug!(%url, "fetching stations");

        let raw = RawResponse::read(self.http.get(&url).send()?)?;
        let stations = parse_stations_response(raw.ok, raw.status, &raw.body)?;

        tracing::debug!(
            status = raw.status,
            count = stations.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "stations received"
        );
        Ok(stations)
    }
}

impl RoutePlanner for BackendClient {
    fn plan(&self, request: &RoutePlanRequest<'_>) -> Result<Vec<RefuelStop>> {
        let url = route_plan_url(&self.base_url);
        let started = Instant::now();
        tracing::debug!(
            %url,
            segments = request.route.segments.len(),
            fuel = request.current_fuel.percent(),
            "requesting route plan"
        );

        let raw = RawResponse::read(self.http.post(&url).json(request).send()?)?;
        let stops = parse_plan_response(raw.ok, raw.status, &raw.body)?;

        tracing::debug!(
            status = raw.status,
            stops = stops.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "route plan received"
        );
        Ok(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    #[test]
    fn station_url() {
        let q = RadiusQuery::new(GeoPoint::new(28.6139, 77.209), 5.0).unwrap();
        assert_eq!(
            stations_url("http://localhost:5000/", &q),
            "http://localhost:5000/api/stations/28.6139/77.209?radius=5"
        );
        assert_eq!(
            route_plan_url("http://localhost:5000"),
            "http://localhost:5000/api/route-plan"
        );
    }

    #[test]
    fn error_field_wins() {
        let body = r#"{"error":"No suitable locations found","stations":[]}"#;
        let err = parse_stations_response(true, 200, body).unwrap_err();
        assert!(matches!(err, LocatorError::Upstream(m) if m == "No suitable locations found"));
    }

    #[test]
    fn decodes_station_list() {
        let body = r#"{"stations":[{"id":1,"name":"A","position":{"lat":1,"lng":2}}]}"#;
        let stations = parse_stations_response(true, 200, body).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "A");
    }

    #[test]
    fn station_without_position_is_skipped() {
        let body = r#"{"stations":[
            {"id":1,"name":"Lost"},
            {"id":2,"name":"Found","lat":28.6,"lng":77.2}
        ]}"#;
        let stations = parse_stations_response(true, 200, body).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Found");
    }

    #[test]
    fn http_failure_without_body() {
        let err = parse_stations_response(false, 500, "Internal Server Error").unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, LocatorError::Network(_)));
    }
}
