pub mod display;
pub mod filter;

pub use display::{MarkerColor, StationLabels, directions_url};
pub use filter::{Located, RadiusQuery, StationHit, filter_within_radius, nearby, sort_by_distance};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Surroundings a station was classified into by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StationKind {
    Market,
    Office,
    Hospital,
    School,
    Mall,
    Parking,
    Factory,
    Other(String),
}

impl StationKind {
    pub fn as_str(&self) -> &str {
        match self {
            StationKind::Market => "market",
            StationKind::Office => "office",
            StationKind::Hospital => "hospital",
            StationKind::School => "school",
            StationKind::Mall => "mall",
            StationKind::Parking => "parking",
            StationKind::Factory => "factory",
            StationKind::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for StationKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" => StationKind::Market,
            "office" => StationKind::Office,
            "hospital" => StationKind::Hospital,
            "school" => StationKind::School,
            "mall" => StationKind::Mall,
            "parking" => StationKind::Parking,
            "factory" => StationKind::Factory,
            _ => StationKind::Other(s),
        }
    }
}

impl From<StationKind> for String {
    fn from(k: StationKind) -> Self {
        k.as_str().to_string()
    }
}

impl Default for StationKind {
    fn default() -> Self {
        StationKind::Other("default".to_string())
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A refuelling station as returned by the search backend.
///
/// The client never mutates these; distance from the user is a derived
/// annotation carried by [`StationHit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StationWire")]
pub struct Station {
    pub id: String,
    pub name: String,
    pub position: GeoPoint,
    #[serde(rename = "type")]
    pub kind: StationKind,
    #[serde(rename = "active_chargers")]
    pub active_units: u32,
    #[serde(rename = "total_chargers")]
    pub total_units: u32,
    #[serde(rename = "wait_time")]
    pub wait_time_minutes: f64,
    /// Rated power in kW, when the backend reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_kw: Option<f64>,
}

impl Station {
    pub fn is_available(&self) -> bool {
        self.active_units > 0
    }
}

// Backend payloads are loose: ids may be numbers or strings, the position may
// be nested or flat, and power may be "150kW" or 150.
#[derive(Deserialize)]
struct StationWire {
    #[serde(default)]
    id: Option<WireId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    position: Option<GeoPoint>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    active_chargers: u32,
    #[serde(default)]
    total_chargers: u32,
    #[serde(default)]
    wait_time: f64,
    #[serde(default)]
    power: Option<WirePower>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Num(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePower {
    Kw(f64),
    Label(String),
}

impl WirePower {
    fn kw(self) -> Option<f64> {
        match self {
            WirePower::Kw(v) => Some(v),
            WirePower::Label(s) => {
                let digits = s.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
                digits.trim().parse().ok()
            }
        }
    }
}

impl TryFrom<StationWire> for Station {
    type Error = String;

    fn try_from(w: StationWire) -> Result<Self, Self::Error> {
        let position = match (w.position, w.lat, w.lng) {
            (Some(p), _, _) => p,
            (None, Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => return Err("station has no position".to_string()),
        };

        let id = match w.id {
            Some(WireId::Num(n)) => n.to_string(),
            Some(WireId::Text(s)) => s,
            None => String::new(),
        };

        let name = w.name.unwrap_or_else(|| "Unnamed Station".to_string());

        Ok(Station {
            id,
            name,
            position,
            kind: w.kind.map(StationKind::from).unwrap_or_default(),
            active_units: w.active_chargers,
            total_units: w.total_chargers.max(w.active_chargers),
            wait_time_minutes: w.wait_time.max(0.0),
            power_kw: w.power.and_then(WirePower::kw),
        })
    }
}
