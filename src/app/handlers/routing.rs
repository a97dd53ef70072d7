//! Handler für die Routen-Sitzung.

use super::dialog::report_error;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{MarkerId, RouteRequest, RouteResult, TravelMode};

/// Startet Routing (ohne Standort: Hinweis, keine Änderung).
pub fn start(state: &mut AppState) {
    if let Err(e) = use_cases::routing::start(state) {
        report_error(state, e);
    }
}

/// Beendet Routing.
pub fn stop(state: &mut AppState) {
    use_cases::routing::stop(state);
}

/// Wählt das Routenziel.
pub fn select_destination(state: &mut AppState, marker_id: MarkerId) {
    use_cases::routing::select_destination(state, marker_id);
}

/// Wechselt die Fortbewegungsart.
pub fn set_travel_mode(state: &mut AppState, mode: TravelMode) {
    use_cases::routing::set_travel_mode(state, mode);
}

/// Übernimmt ein berechnetes Ergebnis.
pub fn accept(state: &mut AppState, result: RouteResult) {
    use_cases::routing::accept_result(state, result);
}

/// Verbucht einen Berechnungsfehler.
pub fn reject(state: &mut AppState, request: RouteRequest, message: &str) {
    if let Err(e) = use_cases::routing::fail(state, &request, message) {
        report_error(state, e);
    }
}
