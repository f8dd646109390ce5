use crate::geo::GeoPoint;
use crate::station::{Station, StationKind};

/// Power shown when the backend does not report one.
pub const DEFAULT_POWER_KW: f64 = 50.0;

/// Wording used when presenting stations.
///
/// The station list and the map popups used to live in two near-identical
/// views that only differed in these labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationLabels {
    pub unit_plural: &'static str,
    pub searching: &'static str,
}

impl StationLabels {
    pub const PUMPS: StationLabels = StationLabels {
        unit_plural: "CNG Pumps",
        searching: "Finding CNG stations...",
    };

    pub const CHARGERS: StationLabels = StationLabels {
        unit_plural: "Chargers",
        searching: "Finding CNG stations...",
    };

    pub fn units(&self, station: &Station) -> String {
        format!(
            "{}/{} {}",
            station.active_units, station.total_units, self.unit_plural
        )
    }

    pub fn none_found(&self, radius_km: f64) -> String {
        format!("No CNG stations found within {radius_km}km radius")
    }
}

impl Default for StationLabels {
    fn default() -> Self {
        Self::PUMPS
    }
}

pub fn power_text(station: &Station) -> String {
    format!("{} kW", station.power_kw.unwrap_or(DEFAULT_POWER_KW))
}

pub fn wait_text(station: &Station) -> String {
    format!("{:.2} mins wait", station.wait_time_minutes)
}

/// Marker palette keyed by station kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColor {
    pub hex: &'static str,
    /// Unavailable stations are drawn at half opacity.
    pub dimmed: bool,
}

impl MarkerColor {
    pub fn for_station(station: &Station) -> Self {
        let hex = match station.kind {
            StationKind::Market => "#4CAF50",
            StationKind::Office => "#2196F3",
            StationKind::Hospital => "#F44336",
            StationKind::School => "#FF9800",
            StationKind::Mall => "#9C27B0",
            StationKind::Parking => "#FDD835",
            StationKind::Factory | StationKind::Other(_) => "#2196F3",
        };
        Self {
            hex,
            dimmed: !station.is_available(),
        }
    }
}

/// Driving directions from `origin` to `destination` in Google Maps.
pub fn directions_url(origin: GeoPoint, destination: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}&travelmode=driving",
        origin.lat, origin.lng, destination.lat, destination.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(kind: StationKind, active: u32, power: Option<f64>) -> Station {
        Station {
            id: "1".into(),
            name: "Test".into(),
            position: GeoPoint::new(0.0, 0.0),
            kind,
            active_units: active,
            total_units: 8,
            wait_time_minutes: 7.456,
            power_kw: power,
        }
    }

    #[test]
    fn labels_differ_only_in_wording() {
        let s = station(StationKind::Market, 3, None);
        assert_eq!(StationLabels::PUMPS.units(&s), "3/8 CNG Pumps");
        assert_eq!(StationLabels::CHARGERS.units(&s), "3/8 Chargers");
        assert_eq!(StationLabels::PUMPS.searching, StationLabels::CHARGERS.searching);
        assert_eq!(StationLabels::CHARGERS.searching, "Finding CNG stations...");
    }

    #[test]
    fn power_defaults_to_fifty() {
        assert_eq!(power_text(&station(StationKind::Market, 1, None)), "50 kW");
        assert_eq!(power_text(&station(StationKind::Market, 1, Some(150.0))), "150 kW");
        assert_eq!(wait_text(&station(StationKind::Market, 1, None)), "7.46 mins wait");
    }

    #[test]
    fn marker_palette() {
        let c = MarkerColor::for_station(&station(StationKind::Hospital, 0, None));
        assert_eq!(c.hex, "#F44336");
        assert!(c.dimmed);

        let c = MarkerColor::for_station(&station(StationKind::Other("x".into()), 2, None));
        assert_eq!(c.hex, "#2196F3");
        assert!(!c.dimmed);
    }

    #[test]
    fn directions_link() {
        let url = directions_url(GeoPoint::new(28.6, 77.2), GeoPoint::new(28.7, 77.1));
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=28.6,77.2&destination=28.7,77.1&travelmode=driving"
        );
    }
}
