//! Map state owned by one front end.
//!
//! Holds the user location, search radius, station markers and the planned
//! route overlay. Every update is computed first and committed only on
//! success, so a failed request leaves the previous view untouched.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::api::{RouteEngine, RoutePlanner, StationSource};
use crate::error::{LocatorError, Result};
use crate::geo::{GeoBounds, GeoPoint};
use crate::plan::{PlannedRoute, RoutePlanRequest};
use crate::station::{
    Located, RadiusQuery, Station, StationHit, StationLabels, directions_url, nearby,
};
use crate::vehicle::{FuelLevel, VehicleProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    User,
    Station,
    RouteStart,
    RouteEnd,
    RefuelStop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: GeoPoint,
    pub label: String,
}

/// A group of markers that is always swapped as a whole.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    generation: u64,
}

impl MarkerLayer {
    /// Remove every current marker, then add the new ones.
    pub fn replace<I>(&mut self, generation: u64, markers: I)
    where
        I: IntoIterator<Item = Marker>,
    {
        self.clear();
        self.markers.extend(markers);
        self.generation = generation;
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Generation of the request that produced the current markers.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Identifies one station search. Only the newest ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestTicket {
    generation: u64,
    query: RadiusQuery,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &RadiusQuery {
        &self.query
    }
}

/// Shared flag checked between chained requests.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(LocatorError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Inputs of the route-planning flow.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub vehicle: VehicleProfile,
    pub current_fuel: FuelLevel,
}

/// Search-area overlay around the user location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusCircle {
    pub center: GeoPoint,
    pub radius_m: f64,
}

pub struct MapSession {
    labels: StationLabels,
    location: Option<GeoPoint>,
    radius_km: u32,
    circle: Option<RadiusCircle>,
    user_layer: MarkerLayer,
    station_layer: MarkerLayer,
    route_layer: MarkerLayer,
    stations: Vec<StationHit>,
    route: Option<PlannedRoute>,
    generation: u64,
    loading: bool,
}

impl MapSession {
    pub fn new(radius_km: u32, labels: StationLabels) -> Self {
        Self {
            labels,
            location: None,
            radius_km,
            circle: None,
            user_layer: MarkerLayer::default(),
            station_layer: MarkerLayer::default(),
            route_layer: MarkerLayer::default(),
            stations: Vec::new(),
            route: None,
            generation: 0,
            loading: false,
        }
    }

    pub fn labels(&self) -> StationLabels {
        self.labels
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn radius_km(&self) -> u32 {
        self.radius_km
    }

    pub fn circle(&self) -> Option<RadiusCircle> {
        self.circle
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stations(&self) -> &[StationHit] {
        &self.stations
    }

    pub fn user_markers(&self) -> &MarkerLayer {
        &self.user_layer
    }

    pub fn station_markers(&self) -> &MarkerLayer {
        &self.station_layer
    }

    pub fn route_markers(&self) -> &MarkerLayer {
        &self.route_layer
    }

    pub fn planned_route(&self) -> Option<&PlannedRoute> {
        self.route.as_ref()
    }

    fn next_ticket(&mut self, center: GeoPoint) -> Result<RequestTicket> {
        let query = RadiusQuery::new(center, f64::from(self.radius_km))?;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            %center,
            radius_km = self.radius_km,
            "new station search"
        );
        Ok(RequestTicket {
            generation: self.generation,
            query,
        })
    }

    fn update_circle(&mut self) {
        self.circle = self.location.map(|center| RadiusCircle {
            center,
            radius_m: f64::from(self.radius_km) * 1000.0,
        });
    }

    /// Move the user marker and start a new search there.
    pub fn select_location(&mut self, point: GeoPoint) -> Result<RequestTicket> {
        let ticket = self.next_ticket(point)?;

        self.location = Some(point);
        self.user_layer.replace(
            ticket.generation,
            [Marker {
                kind: MarkerKind::User,
                position: point,
                label: "Your Location".to_string(),
            }],
        );
        self.update_circle();
        Ok(ticket)
    }

    /// Change the radius. Returns a ticket for the refetch when a location is set.
    pub fn set_radius(&mut self, radius_km: u32) -> Result<Option<RequestTicket>> {
        if radius_km == 0 {
            return Err(LocatorError::InvalidInput(
                "Radius must be at least 1 km".to_string(),
            ));
        }
        self.radius_km = radius_km;
        self.update_circle();

        match self.location {
            Some(center) => self.next_ticket(center).map(Some),
            None => Ok(None),
        }
    }

    fn ensure_current(&self, ticket: &RequestTicket) -> Result<()> {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded station response"
            );
            return Err(LocatorError::Cancelled);
        }
        Ok(())
    }

    /// Commit the outcome of a station fetch.
    ///
    /// The backend is asked to filter by radius too, but its answer is
    /// filtered again here before it is sorted and shown.
    pub fn complete_stations(
        &mut self,
        ticket: &RequestTicket,
        fetched: Result<Vec<Station>>,
    ) -> Result<&[StationHit]> {
        self.ensure_current(ticket)?;
        self.loading = false;

        let hits = nearby(&fetched?, &ticket.query);

        self.station_layer.replace(
            ticket.generation,
            hits.iter().map(|h| Marker {
                kind: MarkerKind::Station,
                position: h.station.position,
                label: h.station.name.clone(),
            }),
        );
        self.stations = hits;
        Ok(&self.stations)
    }

    /// Fetch stations for `ticket` and commit them.
    pub fn refresh_stations(
        &mut self,
        ticket: &RequestTicket,
        source: &dyn StationSource,
    ) -> Result<&[StationHit]> {
        self.ensure_current(ticket)?;
        self.loading = true;
        let fetched = source.fetch_stations(&ticket.query);
        if self.ensure_current(ticket).is_err() {
            self.loading = false;
            return Err(LocatorError::Cancelled);
        }
        self.complete_stations(ticket, fetched)
    }

    /// Select a location and load the stations around it.
    pub fn search_at(
        &mut self,
        point: GeoPoint,
        source: &dyn StationSource,
    ) -> Result<&[StationHit]> {
        let ticket = self.select_location(point)?;
        self.refresh_stations(&ticket, source)
    }

    /// Extent covering the user and every station marker.
    pub fn station_bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(
            self.location
                .into_iter()
                .chain(self.stations.iter().map(|h| h.station.position)),
        )
    }

    /// Directions link from the user location to `destination`.
    pub fn directions_to(&self, destination: GeoPoint) -> Result<String> {
        let origin = self.location.ok_or_else(|| {
            LocatorError::InvalidInput("Please set your location first!".to_string())
        })?;
        Ok(directions_url(origin, destination))
    }

    /// Fetch a driving route, ask the solver for stops, and show both.
    ///
    /// The previous route stays on screen until the new one is complete.
    pub fn plan_route(
        &mut self,
        query: RouteQuery,
        engine: &dyn RouteEngine,
        planner: &dyn RoutePlanner,
        cancel: &CancelToken,
    ) -> Result<&PlannedRoute> {
        if query.from == query.to {
            return Err(LocatorError::InvalidInput(
                "Start and destination are the same point".to_string(),
            ));
        }

        self.loading = true;
        let outcome = Self::fetch_plan(query, engine, planner, cancel);
        self.loading = false;
        let planned = outcome?;

        let generation = self.route_layer.generation() + 1;
        let route = &planned.route;
        let mut markers = vec![
            Marker {
                kind: MarkerKind::RouteStart,
                position: route.start(),
                label: "Start".to_string(),
            },
            Marker {
                kind: MarkerKind::RouteEnd,
                position: route.end(),
                label: "Destination".to_string(),
            },
        ];
        markers.extend(planned.stops.iter().map(|s| Marker {
            kind: MarkerKind::RefuelStop,
            position: s.position(),
            label: s.name.clone(),
        }));
        self.route_layer.replace(generation, markers);

        let planned = self.route.insert(planned);
        Ok(&*planned)
    }

    fn fetch_plan(
        query: RouteQuery,
        engine: &dyn RouteEngine,
        planner: &dyn RoutePlanner,
        cancel: &CancelToken,
    ) -> Result<PlannedRoute> {
        cancel.check()?;
        let route = engine.route(query.from, query.to)?;

        cancel.check()?;
        let request = RoutePlanRequest::new(&route, &query.vehicle, query.current_fuel);
        let stops = planner.plan(&request)?;

        cancel.check()?;
        Ok(PlannedRoute {
            route,
            vehicle: query.vehicle,
            current_fuel: query.current_fuel,
            stops,
        })
    }

    /// Drop the route overlay.
    pub fn clear_route(&mut self) {
        self.route_layer.clear();
        self.route = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_layer_replaces_wholesale() {
        let mut layer = MarkerLayer::default();
        let m = |lat| Marker {
            kind: MarkerKind::Station,
            position: GeoPoint::new(lat, 0.0),
            label: String::new(),
        };
        layer.replace(1, [m(1.0), m(2.0), m(3.0)]);
        assert_eq!(layer.len(), 3);
        layer.replace(2, [m(4.0)]);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.generation(), 2);
        assert_eq!(layer.markers()[0].position.lat, 4.0);
    }

    #[test]
    fn cancel_token_is_shared() {
        let t = CancelToken::new();
        let other = t.clone();
        assert!(t.check().is_ok());
        other.cancel();
        assert!(matches!(t.check(), Err(LocatorError::Cancelled)));
    }

    #[test]
    fn radius_change_without_location_needs_no_fetch() {
        let mut s = MapSession::new(5, StationLabels::default());
        assert!(s.set_radius(10).unwrap().is_none());
        assert_eq!(s.radius_km(), 10);
        assert!(s.circle().is_none());
        assert!(s.set_radius(0).is_err());
    }

    #[test]
    fn selecting_location_moves_single_user_marker() {
        let mut s = MapSession::new(5, StationLabels::default());
        s.select_location(GeoPoint::new(1.0, 1.0)).unwrap();
        s.select_location(GeoPoint::new(2.0, 2.0)).unwrap();
        assert_eq!(s.user_markers().len(), 1);
        assert_eq!(s.user_markers().markers()[0].position, GeoPoint::new(2.0, 2.0));

        let c = s.circle().unwrap();
        assert_eq!(c.center, GeoPoint::new(2.0, 2.0));
        assert_eq!(c.radius_m, 5000.0);
    }

    #[test]
    fn directions_need_location() {
        let mut s = MapSession::new(5, StationLabels::default());
        let dest = GeoPoint::new(28.7, 77.1);
        assert!(s.directions_to(dest).unwrap_err().is_user_input());
        s.select_location(GeoPoint::new(28.6, 77.2)).unwrap();
        assert!(s.directions_to(dest).unwrap().contains("destination=28.7,77.1"));
    }
}
