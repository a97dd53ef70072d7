//! Fehler-Taxonomie der Anwendung.
//!
//! Kein Fehler ist fatal: jeder Fehler lässt den `AppState` in einem gültigen,
//! vorher erreichbaren Zustand und wird höchstens als Hinweis angezeigt.

use thiserror::Error;

/// Nicht-fatale Fehlerarten, in die Kollaborator-Fehler übersetzt werden.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Standortzugriff verweigert (deaktiviert Marker-Platzierung und Routing)
    #[error("Location permission denied")]
    PermissionDenied,
    /// Standort momentan nicht ermittelbar (vom Nutzer wiederholbar)
    #[error("Current location is unavailable")]
    LocationUnavailable,
    /// Rückwärts-Geocoding fehlgeschlagen (wird nie angezeigt)
    #[error("Address lookup failed")]
    GeocodingFailed,
    /// Routenberechnung fehlgeschlagen; Routing bleibt aktiv
    #[error("Route computation failed: {0}")]
    RouteComputationFailed(String),
    /// "Letzten Marker entfernen" ohne vorhandene Marker
    #[error("There are no markers to remove")]
    NoMarkersToRemove,
    /// Vorbedingung einer Operation nicht erfüllt
    #[error("Precondition failed: {0}")]
    Precondition(&'static str),
    /// Koordinate außerhalb des WGS84-Wertebereichs
    #[error("Invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl AppError {
    /// Gibt zurück, ob der Fehler dem Nutzer angezeigt wird.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, AppError::GeocodingFailed)
    }
}
