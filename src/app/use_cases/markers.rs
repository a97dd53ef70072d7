//! Use-Cases für Marker-Operationen.

use crate::app::state::PermissionStatus;
use crate::app::{AppState, HostRequest};
use crate::core::{AppError, Coordinate, MarkerCategory, MarkerId};

/// Fordert Standort + Adresse für einen neuen Marker beim Host an.
pub fn request_placement(state: &mut AppState) -> Result<(), AppError> {
    if state.location.permission == PermissionStatus::Denied {
        return Err(AppError::PermissionDenied);
    }
    state.push_host_request(HostRequest::ResolvePlacement);
    Ok(())
}

/// Legt einen Marker mit der aktuell gewählten Kategorie an.
///
/// Fehlt die Adresse (Geocoding fehlgeschlagen), wird der konfigurierte
/// Platzhalter verwendet. Nur eine ungültige Koordinate ist ein Fehler.
pub fn add_marker(
    state: &mut AppState,
    coordinate: Coordinate,
    address: Option<String>,
    timestamp_ms: i64,
) -> Result<MarkerId, AppError> {
    if !coordinate.is_valid() {
        return Err(AppError::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        });
    }

    let address = address
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| state.options.address_placeholder.clone());
    let category = state.selected_category;
    let id = state
        .markers
        .insert(coordinate, category, address, timestamp_ms);

    log::info!(
        "Marker {} erstellt (Kategorie: {:?}, Position: {})",
        id,
        category,
        coordinate
    );
    Ok(id)
}

/// Entfernt einen Marker. Fehlende IDs sind kein Fehler (Doppel-Tap).
pub fn remove_marker(state: &mut AppState, marker_id: MarkerId) {
    if state.markers.remove(marker_id).is_none() {
        log::debug!("Marker {} nicht vorhanden, nichts zu entfernen", marker_id);
        return;
    }

    if state.ui.inspected_marker == Some(marker_id) {
        state.ui.inspected_marker = None;
    }
    if state.ui.pending_removal == Some(marker_id) {
        state.ui.pending_removal = None;
    }
    log::info!("Marker {} entfernt", marker_id);
}

/// Erster Schritt von "letzten Marker entfernen": merkt den Kandidaten zur Bestätigung vor.
pub fn request_remove_last(state: &mut AppState) -> Result<(), AppError> {
    let Some(last) = state.markers.last() else {
        return Err(AppError::NoMarkersToRemove);
    };
    state.ui.pending_removal = Some(last.id);
    Ok(())
}

/// Zweiter Schritt: entfernt den bestätigten Marker.
pub fn confirm_remove_last(state: &mut AppState) {
    match state.ui.pending_removal.take() {
        Some(marker_id) => remove_marker(state, marker_id),
        None => log::debug!("Keine Entfernen-Bestätigung ausstehend"),
    }
}

/// Bricht "letzten Marker entfernen" ab.
pub fn cancel_remove_last(state: &mut AppState) {
    state.ui.pending_removal = None;
}

/// Setzt die Kategorie für künftige Marker (bestehende bleiben unverändert).
pub fn select_category(state: &mut AppState, category: MarkerCategory) {
    state.selected_category = category;
    log::info!("Marker-Kategorie: {:?}", category);
}

/// Öffnet die Details eines Markers.
pub fn inspect_marker(state: &mut AppState, marker_id: MarkerId) {
    if state.markers.get(marker_id).is_some() {
        state.ui.inspected_marker = Some(marker_id);
    } else {
        log::debug!("Marker {} nicht vorhanden", marker_id);
    }
}

/// Schließt die Marker-Details.
pub fn close_inspection(state: &mut AppState) {
    state.ui.inspected_marker = None;
}
