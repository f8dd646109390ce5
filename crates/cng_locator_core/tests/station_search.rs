mod common;

use approx::assert_abs_diff_eq;
use cng_locator_core::api::backend::parse_stations_response;
use cng_locator_core::geo::{GeoPoint, distance_km};
use cng_locator_core::station::{
    RadiusQuery, Station, StationLabels, filter_within_radius, nearby, sort_by_distance,
};

use crate::common::{NEW_DELHI, north_of, station};

#[test]
fn filter_edge_radii() {
    let here = station("here", NEW_DELHI);
    let near = station("near", north_of(NEW_DELHI, 1.0));
    let far = station("far", GeoPoint::new(-33.8688, 151.2093));
    let all = vec![here.clone(), near.clone(), far.clone()];

    let zero = filter_within_radius(&all, NEW_DELHI, 0.0);
    assert_eq!(zero, vec![here.clone()]);

    let elsewhere = vec![near.clone(), far.clone()];
    assert!(filter_within_radius(&elsewhere, NEW_DELHI, 0.0).is_empty());

    let huge = filter_within_radius(&all, NEW_DELHI, 25_000.0);
    assert_eq!(huge, all);

    let none: Vec<Station> = Vec::new();
    assert!(filter_within_radius(&none, NEW_DELHI, 5.0).is_empty());
}

#[test]
fn equal_distances_keep_input_order() {
    let offset = 0.01;
    let east = station("east", GeoPoint::new(0.0, offset));
    let west = station("west", GeoPoint::new(0.0, -offset));
    let origin = GeoPoint::new(0.0, 0.0);

    let sorted = sort_by_distance(&[east.clone(), west.clone()], origin);
    assert_eq!(sorted[0].id, "east");
    assert_eq!(sorted[1].id, "west");

    let sorted = sort_by_distance(&[west, east], origin);
    assert_eq!(sorted[0].id, "west");
    assert_eq!(sorted[1].id, "east");
}

#[test]
fn five_km_search_keeps_and_orders_the_inner_stations() {
    // Deliberately shuffled input.
    let stations = vec![
        station("10", north_of(NEW_DELHI, 10.0)),
        station("4.9", north_of(NEW_DELHI, 4.9)),
        station("5.1", north_of(NEW_DELHI, 5.1)),
        station("2.1", north_of(NEW_DELHI, 2.1)),
    ];
    let query = RadiusQuery::new(NEW_DELHI, 5.0).unwrap();

    let hits = nearby(&stations, &query);
    let ids: Vec<&str> = hits.iter().map(|h| h.station.id.as_str()).collect();
    assert_eq!(ids, ["2.1", "4.9"]);
    assert_abs_diff_eq!(hits[0].distance_km, 2.1, epsilon = 1e-6);
    assert_abs_diff_eq!(hits[1].distance_km, 4.9, epsilon = 1e-6);

    for h in &hits {
        assert!(distance_km(NEW_DELHI, h.station.position) <= 5.0);
    }
}

#[test]
fn backend_payload_to_sorted_hits() {
    let body = format!(
        r#"{{"stations":[
            {{"id":1,"name":"Far","position":{{"lat":{},"lng":77.209}},"active_chargers":0,"total_chargers":3,"wait_time":0,"type":"office"}},
            {{"id":2,"name":"Near","lat":{},"lng":77.209,"active_chargers":2,"total_chargers":2,"wait_time":7.25,"type":"Market","power":"150kW"}}
        ]}}"#,
        north_of(NEW_DELHI, 3.0).lat,
        north_of(NEW_DELHI, 1.0).lat,
    );

    let stations = parse_stations_response(true, 200, &body).unwrap();
    let hits = nearby(&stations, &RadiusQuery::new(NEW_DELHI, 5.0).unwrap());
    assert_eq!(hits[0].station.name, "Near");
    assert_eq!(hits[0].station.power_kw, Some(150.0));
    assert!(!hits[1].station.is_available());

    let labels = StationLabels::PUMPS;
    assert_eq!(labels.units(&hits[0].station), "2/2 CNG Pumps");
    assert_eq!(
        labels.none_found(5.0),
        "No CNG stations found within 5km radius"
    );
}

#[test]
fn invalid_queries_are_user_errors() {
    assert!(RadiusQuery::new(NEW_DELHI, 0.0).unwrap_err().is_user_input());
    assert!(RadiusQuery::new(NEW_DELHI, f64::NAN).unwrap_err().is_user_input());
    assert!(RadiusQuery::new(GeoPoint::new(91.0, 0.0), 5.0).unwrap_err().is_user_input());
}
