//! Use-Cases für Standort und Kartenausschnitt.

use crate::app::state::PermissionStatus;
use crate::app::{AppState, HostRequest};
use crate::core::{AppError, Coordinate, MapRegion};

/// Fragt die Standort-Berechtigung beim Host an.
pub fn request_permission(state: &mut AppState) {
    state.push_host_request(HostRequest::RequestPermission);
}

/// Übernimmt die Antwort der Berechtigungsanfrage.
///
/// Verweigert → `PermissionDenied` (Marker-Platzierung und Routing bleiben deaktiviert).
pub fn apply_permission(state: &mut AppState, granted: bool) -> Result<(), AppError> {
    if granted {
        state.location.permission = PermissionStatus::Granted;
        log::info!("Standortzugriff erlaubt");
        Ok(())
    } else {
        state.location.permission = PermissionStatus::Denied;
        log::warn!("Standortzugriff verweigert");
        Err(AppError::PermissionDenied)
    }
}

/// Fordert einen Standort-Fix beim Host an.
pub fn fetch_location(state: &mut AppState) -> Result<(), AppError> {
    if state.location.permission == PermissionStatus::Denied {
        return Err(AppError::PermissionDenied);
    }
    state.push_host_request(HostRequest::FetchLocation);
    Ok(())
}

/// Setzt den Gerätestandort. Beim ersten bekannten Standort wird die Karte zentriert.
pub fn set_location(state: &mut AppState, coordinate: Coordinate) -> Result<(), AppError> {
    if !coordinate.is_valid() {
        return Err(AppError::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        });
    }

    state.location.current = Some(coordinate);
    if !state.location.centered {
        center_on(state, coordinate);
        state.location.centered = true;
        log::info!("Karte auf ersten Standort zentriert: {}", coordinate);
    } else {
        log::debug!("Standort aktualisiert: {}", coordinate);
    }
    Ok(())
}

/// Zentriert die Karte erneut auf den bekannten Standort.
pub fn recenter(state: &mut AppState) -> Result<(), AppError> {
    let Some(coordinate) = state.location.current else {
        return Err(AppError::LocationUnavailable);
    };
    center_on(state, coordinate);
    Ok(())
}

/// Übernimmt den von der Anzeige gemeldeten Kartenausschnitt.
pub fn set_region(state: &mut AppState, region: MapRegion) {
    state.view.region = Some(region);
}

fn center_on(state: &mut AppState, coordinate: Coordinate) {
    state.view.region = Some(MapRegion::around(
        coordinate,
        state.options.initial_latitude_delta,
        state.options.initial_longitude_delta,
    ));
}
