#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use cng_locator_core::api::{RouteEngine, RoutePlanner, StationSource};
use cng_locator_core::geo::{EARTH_RADIUS_KM, GeoPoint};
use cng_locator_core::plan::{RefuelStop, RoutePlanRequest};
use cng_locator_core::routing::Route;
use cng_locator_core::session::CancelToken;
use cng_locator_core::station::{RadiusQuery, Station, StationKind};
use cng_locator_core::{LocatorError, Result};

pub const NEW_DELHI: GeoPoint = GeoPoint::new(28.6139, 77.2090);

/// Point `km` kilometres due north of `origin`.
pub fn north_of(origin: GeoPoint, km: f64) -> GeoPoint {
    GeoPoint::new(origin.lat + (km / EARTH_RADIUS_KM).to_degrees(), origin.lng)
}

pub fn station(id: &str, position: GeoPoint) -> Station {
    Station {
        id: id.to_string(),
        name: format!("CNG Station {id}"),
        position,
        kind: StationKind::Market,
        active_units: 2,
        total_units: 4,
        wait_time_minutes: 5.0,
        power_kw: None,
    }
}

/// Station source returning a canned answer and recording the queries it saw.
pub struct FakeStations {
    pub answer: RefCell<Result<Vec<Station>>>,
    pub queries: RefCell<Vec<RadiusQuery>>,
}

impl FakeStations {
    pub fn ok(stations: Vec<Station>) -> Self {
        Self {
            answer: RefCell::new(Ok(stations)),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: LocatorError) -> Self {
        Self {
            answer: RefCell::new(Err(err)),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl StationSource for FakeStations {
    fn fetch_stations(&self, query: &RadiusQuery) -> Result<Vec<Station>> {
        self.queries.borrow_mut().push(*query);
        match &*self.answer.borrow() {
            Ok(list) => Ok(list.clone()),
            Err(e) => Err(clone_err(e)),
        }
    }
}

/// Route engine that answers with a straight two-point route.
pub struct FakeEngine {
    pub fail_with: Option<LocatorError>,
    pub calls: Cell<usize>,
    /// Cancelled right after the route is produced.
    pub cancel_after: Option<CancelToken>,
}

impl FakeEngine {
    pub fn ok() -> Self {
        Self {
            fail_with: None,
            calls: Cell::new(0),
            cancel_after: None,
        }
    }
}

impl RouteEngine for FakeEngine {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route> {
        self.calls.set(self.calls.get() + 1);
        if let Some(e) = &self.fail_with {
            return Err(clone_err(e));
        }
        let route = Route::from_polyline(vec![from, to], 42)?;
        if let Some(t) = &self.cancel_after {
            t.cancel();
        }
        Ok(route)
    }
}

/// Planner returning fixed stops and keeping the last request as JSON.
pub struct FakePlanner {
    pub stops: Vec<RefuelStop>,
    pub fail_with: Option<LocatorError>,
    pub last_request: RefCell<Option<serde_json::Value>>,
}

impl FakePlanner {
    pub fn with_stops(stops: Vec<RefuelStop>) -> Self {
        Self {
            stops,
            fail_with: None,
            last_request: RefCell::new(None),
        }
    }
}

impl RoutePlanner for FakePlanner {
    fn plan(&self, request: &RoutePlanRequest<'_>) -> Result<Vec<RefuelStop>> {
        *self.last_request.borrow_mut() = Some(serde_json::to_value(request)?);
        match &self.fail_with {
            Some(e) => Err(clone_err(e)),
            None => Ok(self.stops.clone()),
        }
    }
}

pub fn stop(name: &str, at: GeoPoint) -> RefuelStop {
    RefuelStop {
        name: name.to_string(),
        lat: at.lat,
        lng: at.lng,
        arrival_fuel_pct: 15.0,
        fill_time_minutes: 8.0,
        departure_fuel_pct: 95.0,
        distance_from_start_km: None,
        kind: None,
    }
}

fn clone_err(e: &LocatorError) -> LocatorError {
    match e {
        LocatorError::InvalidInput(m) => LocatorError::InvalidInput(m.clone()),
        LocatorError::UnknownVehicle(m) => LocatorError::UnknownVehicle(m.clone()),
        LocatorError::Network(m) => LocatorError::Network(m.clone()),
        LocatorError::Upstream(m) => LocatorError::Upstream(m.clone()),
        LocatorError::Timeout(m) => LocatorError::Timeout(m.clone()),
        LocatorError::Cancelled => LocatorError::Cancelled,
        LocatorError::Config(m) => LocatorError::Config(m.clone()),
        other => LocatorError::Upstream(other.to_string()),
    }
}
