//! Geografische Koordinaten (WGS84, Grad).

use super::AppError;
use serde::{Deserialize, Serialize};

/// Mittlerer Erdradius in Kilometern (für Großkreis-Distanzen).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Breiten-/Längengrad-Paar in Grad (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Breitengrad in [-90, 90]
    pub latitude: f64,
    /// Längengrad in [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Erstellt eine validierte Koordinate.
    ///
    /// Werte außerhalb des gültigen Bereichs (oder NaN) ergeben
    /// `AppError::InvalidCoordinate`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AppError> {
        let coord = Self {
            latitude,
            longitude,
        };
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(AppError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Prüft, ob Breite und Länge im WGS84-Wertebereich liegen.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Großkreis-Distanz zu `other` in Kilometern (Haversine).
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlng = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Karten-Link zum Teilen (`https://maps.google.com/?q=<lat>,<lng>`).
    pub fn maps_link(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.latitude, self.longitude
        )
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}
