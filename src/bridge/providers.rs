//! Schnittstellen der externen Kollaborateure plus einfache Implementierungen.

use crate::app::PermissionStatus;
use crate::core::{AddressComponents, AppError, Coordinate, RouteRequest, RouteResult};
use crate::shared::SharePayload;

/// Gerätestandort und Berechtigung
pub trait LocationProvider {
    /// Fragt die Standort-Berechtigung an.
    fn request_permission(&mut self) -> PermissionStatus;
    /// Ermittelt den aktuellen Standort (`LocationUnavailable` bei Fehlschlag).
    fn current_position(&mut self) -> Result<Coordinate, AppError>;
}

/// Rückwärts-Geocoding (best effort)
pub trait Geocoder {
    fn reverse_geocode(&mut self, coordinate: Coordinate) -> Result<AddressComponents, AppError>;
}

/// Routenberechnung für ein (Start, Ziel, Modus)-Tripel
pub trait DirectionsProvider {
    /// Liefert ein Ergebnis für genau diese Anfrage oder eine Fehlermeldung.
    fn compute(&mut self, request: &RouteRequest) -> Result<RouteResult, String>;
}

/// HTTP-Transport für Directions-Anfragen (vom Host bereitgestellt)
pub trait DirectionsTransport {
    /// Ruft die URL ab und gibt den Antwort-Body zurück.
    fn fetch(&mut self, url: &str) -> anyhow::Result<String>;
}

/// Teilen über das Betriebssystem
pub trait ShareSink {
    fn share(&mut self, payload: &SharePayload) -> anyhow::Result<()>;
}

/// Standort-Provider mit fester Position (Headless-Betrieb und Tests).
#[derive(Debug, Clone)]
pub struct FixedLocation {
    pub granted: bool,
    /// None = Standort nicht ermittelbar
    pub position: Option<Coordinate>,
}

impl FixedLocation {
    /// Erlaubter Zugriff mit fester Position.
    pub fn at(position: Coordinate) -> Self {
        Self {
            granted: true,
            position: Some(position),
        }
    }
}

impl LocationProvider for FixedLocation {
    fn request_permission(&mut self) -> PermissionStatus {
        if self.granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn current_position(&mut self) -> Result<Coordinate, AppError> {
        if !self.granted {
            return Err(AppError::PermissionDenied);
        }
        self.position.ok_or(AppError::LocationUnavailable)
    }
}

/// Geocoder ohne Dienst: liefert immer `GeocodingFailed` (→ Platzhalter-Adresse).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeocoder;

impl Geocoder for NoGeocoder {
    fn reverse_geocode(&mut self, _coordinate: Coordinate) -> Result<AddressComponents, AppError> {
        Err(AppError::GeocodingFailed)
    }
}

/// Share-Ziel, das die Nutzlast nur loggt.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogShareSink;

impl ShareSink for LogShareSink {
    fn share(&mut self, payload: &SharePayload) -> anyhow::Result<()> {
        log::info!("Teilen: {}", payload.message.replace('\n', " | "));
        Ok(())
    }
}
