use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{LocatorError, Result};
use crate::normalize::normalize_text;

/// Range and refuelling characteristics of a vehicle model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub name: String,
    pub tank_capacity: f64,
    #[serde(rename = "range")]
    pub range_km: f64,
    #[serde(rename = "fillingSpeed")]
    pub fill_rate: f64,
    #[serde(rename = "consumption")]
    pub consumption_per_km: f64,
}

/// An entry of the built-in model table.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub tank_capacity: f64,
    pub range_km: f64,
    pub fill_rate: f64,
    pub consumption_per_km: f64,
}

impl CatalogEntry {
    pub fn profile(&self) -> VehicleProfile {
        VehicleProfile {
            name: self.name.to_string(),
            tank_capacity: self.tank_capacity,
            range_km: self.range_km,
            fill_rate: self.fill_rate,
            consumption_per_km: self.consumption_per_km,
        }
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "tesla_model_3",
        name: "Tesla Model 3",
        tank_capacity: 82.0,
        range_km: 358.0,
        fill_rate: 250.0,
        consumption_per_km: 0.229,
    },
    CatalogEntry {
        key: "nissan_leaf",
        name: "Nissan Leaf",
        tank_capacity: 62.0,
        range_km: 385.0,
        fill_rate: 100.0,
        consumption_per_km: 0.161,
    },
    CatalogEntry {
        key: "chevy_bolt",
        name: "Chevrolet Bolt",
        tank_capacity: 65.0,
        range_km: 417.0,
        fill_rate: 55.0,
        consumption_per_km: 0.156,
    },
];

/// Look a model up by key (`nissan_leaf`) or display name (`Nissan Leaf`).
pub fn lookup(model: &str) -> Result<VehicleProfile> {
    let wanted = normalize_text(model);
    if wanted.is_empty() {
        return Err(LocatorError::InvalidInput(
            "Vehicle model cannot be empty".to_string(),
        ));
    }

    CATALOG
        .iter()
        .find(|e| normalize_text(e.key) == wanted || normalize_text(e.name) == wanted)
        .map(CatalogEntry::profile)
        .ok_or_else(|| LocatorError::UnknownVehicle(model.trim().to_string()))
}

/// Fuel level in whole percent, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FuelLevel(u8);

impl FuelLevel {
    pub fn new(pct: i64) -> Result<Self> {
        if !(0..=100).contains(&pct) {
            return Err(LocatorError::InvalidInput(format!(
                "Current fuel must be between 0 and 100 (got {pct})"
            )));
        }
        Ok(Self(pct as u8))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl FromStr for FuelLevel {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim().trim_end_matches('%').trim();
        let pct: i64 = t
            .parse()
            .map_err(|_| LocatorError::InvalidInput(format!("Invalid fuel percentage: '{s}'")))?;
        Self::new(pct)
    }
}

impl fmt::Display for FuelLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
