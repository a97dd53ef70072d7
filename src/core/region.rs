//! Sichtbarer Kartenausschnitt.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Kleinstes Delta beim Einpassen, damit ein einzelner Punkt nicht unendlich weit zoomt.
const MIN_FIT_DELTA: f64 = 0.005;

/// Kartenausschnitt: Mittelpunkt plus Breiten-/Längen-Ausdehnung in Grad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Erstellt einen Ausschnitt um `center`.
    pub fn around(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Passt den Ausschnitt an alle Koordinaten an.
    ///
    /// `padding` ist ein relativer Rand (0.2 = 20 % je Achse zusätzlich).
    /// Gibt `None` für eine leere Liste zurück.
    pub fn fit(coordinates: &[Coordinate], padding: f64) -> Option<Self> {
        let first = coordinates.first()?;
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lng, mut max_lng) = (first.longitude, first.longitude);

        for c in &coordinates[1..] {
            min_lat = min_lat.min(c.latitude);
            max_lat = max_lat.max(c.latitude);
            min_lng = min_lng.min(c.longitude);
            max_lng = max_lng.max(c.longitude);
        }

        let scale = 1.0 + padding.max(0.0);
        Some(Self {
            center: Coordinate {
                latitude: (min_lat + max_lat) / 2.0,
                longitude: (min_lng + max_lng) / 2.0,
            },
            latitude_delta: ((max_lat - min_lat) * scale).clamp(MIN_FIT_DELTA, 180.0),
            longitude_delta: ((max_lng - min_lng) * scale).clamp(MIN_FIT_DELTA, 360.0),
        })
    }

    /// Prüft, ob eine Koordinate im Ausschnitt liegt.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        (coord.latitude - self.center.latitude).abs() <= self.latitude_delta / 2.0
            && (coord.longitude - self.center.longitude).abs() <= self.longitude_delta / 2.0
    }
}
