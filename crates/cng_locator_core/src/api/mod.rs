//! Remote collaborators: the station/route-plan backend and the routing engine.
//!
//! Flows talk to these through traits so they can run against fakes.

pub mod backend;
pub mod http;
pub mod router;

pub use backend::BackendClient;
pub use router::OsrmClient;

use crate::error::Result;
use crate::geo::GeoPoint;
use crate::plan::{RefuelStop, RoutePlanRequest};
use crate::routing::Route;
use crate::station::{RadiusQuery, Station};

/// Station search (`GET /api/stations/{lat}/{lng}?radius=`).
pub trait StationSource {
    fn fetch_stations(&self, query: &RadiusQuery) -> Result<Vec<Station>>;
}

/// Driving route between two points.
pub trait RouteEngine {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route>;
}

/// Refuelling-stop solver (`POST /api/route-plan`).
pub trait RoutePlanner {
    fn plan(&self, request: &RoutePlanRequest<'_>) -> Result<Vec<RefuelStop>>;
}
