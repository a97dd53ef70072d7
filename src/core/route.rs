//! Routen-Anfragen und -Ergebnisse.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Fortbewegungsart für die Routenberechnung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Transit,
}

impl TravelMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [TravelMode; 3] = [TravelMode::Driving, TravelMode::Walking, TravelMode::Transit];

    /// Parameterwert für die Directions-API (`mode=`).
    pub fn api_name(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }

    /// Anzeigename im Routing-Panel.
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Driving => "Driving",
            TravelMode::Walking => "Walking",
            TravelMode::Transit => "Transit",
        }
    }
}

/// Das (Start, Ziel, Modus)-Tripel, für das eine Route berechnet wird.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub travel_mode: TravelMode,
}

/// Erfolgreich berechnete Route, markiert mit der auslösenden Anfrage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Anfrage, auf die sich das Ergebnis bezieht (für Stale-Erkennung)
    pub request: RouteRequest,
    /// Streckenlänge in Kilometern
    pub distance_km: f64,
    /// Fahrzeit in Minuten
    pub duration_minutes: f64,
    /// Routenverlauf
    pub polyline: Vec<Coordinate>,
}

impl RouteResult {
    /// Modus, für den das Ergebnis berechnet wurde.
    pub fn travel_mode(&self) -> TravelMode {
        self.request.travel_mode
    }

    /// Distanz-Anzeige, z.B. `"5.0 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    /// Dauer-Anzeige, z.B. `"12 min"`.
    pub fn duration_label(&self) -> String {
        format!("{:.0} min", self.duration_minutes)
    }
}
