//! Handler für Standort und Kartenausschnitt.

use super::dialog::report_error;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Coordinate, MapRegion};

/// Fragt die Standort-Berechtigung an.
pub fn request_permission(state: &mut AppState) {
    use_cases::location::request_permission(state);
}

/// Übernimmt die Antwort der Berechtigungsanfrage.
pub fn apply_permission(state: &mut AppState, granted: bool) {
    if let Err(e) = use_cases::location::apply_permission(state, granted) {
        report_error(state, e);
    }
}

/// Fordert einen Standort-Fix an.
pub fn fetch(state: &mut AppState) {
    if let Err(e) = use_cases::location::fetch_location(state) {
        report_error(state, e);
    }
}

/// Setzt den Gerätestandort.
pub fn set(state: &mut AppState, coordinate: Coordinate) {
    if let Err(e) = use_cases::location::set_location(state, coordinate) {
        report_error(state, e);
    }
}

/// Zentriert die Karte auf den Standort.
pub fn recenter(state: &mut AppState) {
    if let Err(e) = use_cases::location::recenter(state) {
        report_error(state, e);
    }
}

/// Übernimmt den gemeldeten Kartenausschnitt.
pub fn set_region(state: &mut AppState, region: MapRegion) {
    use_cases::location::set_region(state, region);
}
