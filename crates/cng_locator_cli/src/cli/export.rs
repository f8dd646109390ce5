//! Machine-readable output for `near`, `route` and `models`.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use cng_locator_core::geo::GeoPoint;
use cng_locator_core::plan::{PlannedRoute, RefuelStop};
use cng_locator_core::station::{MarkerColor, StationHit};
use cng_locator_core::vehicle::CatalogEntry;

/// Generation timestamp stamped on every export.
pub fn generated_at() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[derive(Debug, Serialize)]
pub struct NearExport {
    pub generated_at: String,
    pub center: GeoPoint,
    pub radius_km: u32,
    pub stations: Vec<StationRow>,
}

#[derive(Debug, Serialize)]
pub struct StationRow {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub kind: String,
    pub available: bool,
    pub active_units: u32,
    pub total_units: u32,
    pub wait_time_minutes: f64,
    pub power_kw: Option<f64>,
    pub distance_km: f64,
    pub marker_color: &'static str,
    /// Unavailable stations are drawn dimmed.
    pub marker_dimmed: bool,
    pub directions_url: String,
}

impl StationRow {
    pub fn new(hit: &StationHit, directions_url: String) -> Self {
        let s = &hit.station;
        let color = MarkerColor::for_station(s);
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            lat: s.position.lat,
            lng: s.position.lng,
            kind: s.kind.to_string(),
            available: s.is_available(),
            active_units: s.active_units,
            total_units: s.total_units,
            wait_time_minutes: s.wait_time_minutes,
            power_kw: s.power_kw,
            distance_km: hit.distance_km,
            marker_color: color.hex,
            marker_dimmed: color.dimmed,
            directions_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteExport<'a> {
    pub generated_at: String,
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub vehicle: &'a str,
    pub current_fuel: u8,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub stops: Vec<StopRow>,
}

impl<'a> RouteExport<'a> {
    pub fn new(planned: &'a PlannedRoute) -> Self {
        Self {
            generated_at: generated_at(),
            from: planned.route.start(),
            to: planned.route.end(),
            vehicle: &planned.vehicle.name,
            current_fuel: planned.current_fuel.percent(),
            distance_km: planned.route.total_distance_km,
            duration_minutes: planned.route.duration_minutes,
            stops: planned
                .stops
                .iter()
                .enumerate()
                .map(|(i, s)| StopRow::new(i + 1, s))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StopRow {
    pub stop: usize,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub arrival_fuel_pct: f64,
    pub fill_time_minutes: f64,
    pub departure_fuel_pct: f64,
    pub distance_from_start_km: Option<f64>,
}

impl StopRow {
    pub fn new(index: usize, s: &RefuelStop) -> Self {
        Self {
            stop: index,
            name: s.name.clone(),
            lat: s.lat,
            lng: s.lng,
            arrival_fuel_pct: s.arrival_fuel_pct,
            fill_time_minutes: s.fill_time_minutes,
            departure_fuel_pct: s.departure_fuel_pct,
            distance_from_start_km: s.distance_from_start_km,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelRow {
    pub key: &'static str,
    pub name: &'static str,
    pub tank_capacity: f64,
    pub range_km: f64,
    pub fill_rate: f64,
    pub consumption_per_km: f64,
}

impl From<&CatalogEntry> for ModelRow {
    fn from(e: &CatalogEntry) -> Self {
        Self {
            key: e.key,
            name: e.name,
            tank_capacity: e.tank_capacity,
            range_km: e.range_km,
            fill_rate: e.fill_rate,
            consumption_per_km: e.consumption_per_km,
        }
    }
}

pub fn to_json<T: Serialize>(payload: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

/// One CSV record per row, header taken from the field names.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut w = csv::Writer::from_writer(Vec::new());
    for row in rows {
        w.serialize(row)?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Print to stdout, or write to `file` and confirm on stderr.
pub fn emit(text: &str, file: Option<&Path>) -> Result<()> {
    let Some(path) = file else {
        println!("{}", text.trim_end());
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    f.write_all(text.trim_end().as_bytes())?;
    f.write_all(b"\n")?;

    // stdout remains clean for scripting
    eprintln!("Output written to {}", path.display());
    Ok(())
}
