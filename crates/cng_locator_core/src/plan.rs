//! Request/response boundary of the backend route-plan solver.
//!
//! The solver decides where to stop and how much to fill. This side only
//! packages the route and the vehicle, and unpacks the stops it gets back.

use serde::{Deserialize, Serialize};

use crate::error::{LocatorError, Result};
use crate::geo::GeoPoint;
use crate::routing::Route;
use crate::station::Located;
use crate::vehicle::{FuelLevel, VehicleProfile};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanRequest<'a> {
    pub route: &'a Route,
    pub cng_model: &'a VehicleProfile,
    pub current_fuel: FuelLevel,
}

impl<'a> RoutePlanRequest<'a> {
    pub fn new(route: &'a Route, vehicle: &'a VehicleProfile, current_fuel: FuelLevel) -> Self {
        Self {
            route,
            cng_model: vehicle,
            current_fuel,
        }
    }
}

/// A refuelling stop chosen by the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefuelStop {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "arrivalFuel")]
    pub arrival_fuel_pct: f64,
    #[serde(rename = "fillTime")]
    pub fill_time_minutes: f64,
    #[serde(rename = "departureFuel")]
    pub departure_fuel_pct: f64,
    #[serde(
        default,
        rename = "distanceFromStart",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_from_start_km: Option<f64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Located for RefuelStop {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// A route together with the stops the solver placed on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    pub route: Route,
    pub vehicle: VehicleProfile,
    pub current_fuel: FuelLevel,
    pub stops: Vec<RefuelStop>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanEnvelope {
    #[serde(default)]
    filling_stops: Option<Vec<RefuelStop>>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a route-plan response body.
///
/// A body-level `error` wins over everything; then a non-2xx status; then a
/// missing stop list. An empty stop list is a valid answer (no stops needed).
pub fn parse_plan_response(status_ok: bool, status: u16, body: &str) -> Result<Vec<RefuelStop>> {
    let env: PlanEnvelope = match serde_json::from_str(body) {
        Ok(env) => env,
        Err(_) if !status_ok => {
            return Err(LocatorError::Network(format!(
                "Failed to plan route (HTTP {status})"
            )));
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(msg) = env.error.filter(|m| !m.trim().is_empty()) {
        return Err(LocatorError::Upstream(msg));
    }
    if !status_ok {
        return Err(LocatorError::Network(format!(
            "Failed to plan route (HTTP {status})"
        )));
    }

    env.filling_stops
        .ok_or_else(|| LocatorError::Upstream("No CNG filling stops returned".to_string()))
}
