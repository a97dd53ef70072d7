//! Handler für Marker-Erstellung, -Details, -Entfernen und -Teilen.

use super::dialog::report_error;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Coordinate, MarkerCategory, MarkerId};

/// Fordert Standort + Adresse für einen neuen Marker an.
pub fn request_placement(state: &mut AppState) {
    if let Err(e) = use_cases::markers::request_placement(state) {
        report_error(state, e);
    }
}

/// Legt einen Marker an der übergebenen Position an.
pub fn add(state: &mut AppState, coordinate: Coordinate, address: Option<String>, timestamp_ms: i64) {
    if let Err(e) = use_cases::markers::add_marker(state, coordinate, address, timestamp_ms) {
        report_error(state, e);
    }
}

/// Öffnet die Marker-Details.
pub fn inspect(state: &mut AppState, marker_id: MarkerId) {
    use_cases::markers::inspect_marker(state, marker_id);
}

/// Schließt die Marker-Details.
pub fn close_inspection(state: &mut AppState) {
    use_cases::markers::close_inspection(state);
}

/// Entfernt einen Marker (idempotent).
pub fn remove(state: &mut AppState, marker_id: MarkerId) {
    use_cases::markers::remove_marker(state, marker_id);
}

/// Übergibt einen Marker zum Teilen an den Host.
pub fn share(state: &mut AppState, marker_id: MarkerId) {
    use_cases::share::share_marker(state, marker_id);
}

/// Setzt die Kategorie für neue Marker.
pub fn select_category(state: &mut AppState, category: MarkerCategory) {
    use_cases::markers::select_category(state, category);
}
