//! Use-Cases für die Routen-Sitzung.

use crate::app::{AppState, HostRequest};
use crate::core::{AppError, MapRegion, MarkerId, RouteRequest, RouteResult, TravelMode};

/// Aktiviert Routing mit dem aktuellen Standort als festem Startpunkt.
///
/// Ohne bekannten Standort: `Precondition`, keine Zustandsänderung.
pub fn start(state: &mut AppState) -> Result<(), AppError> {
    let Some(origin) = state.location.current else {
        return Err(AppError::Precondition("location unavailable"));
    };

    state.routing.start(origin);
    // Callouts sind während des Routings deaktiviert
    state.ui.inspected_marker = None;
    log::info!("Routing gestartet (Start: {})", origin);
    Ok(())
}

/// Beendet Routing und verwirft Ziel, Ergebnis und laufende Anfragen (idempotent).
pub fn stop(state: &mut AppState) {
    if state.routing.is_active() {
        log::info!("Routing beendet");
    }
    state.routing.stop();
    clear_route_notice(state);
}

/// Entfernt einen Hinweis zu einer fehlgeschlagenen Routenberechnung.
fn clear_route_notice(state: &mut AppState) {
    if matches!(state.ui.notice, Some(AppError::RouteComputationFailed(_))) {
        state.ui.notice = None;
    }
}

/// Wählt einen Marker als Ziel und löst die Berechnung aus.
pub fn select_destination(state: &mut AppState, marker_id: MarkerId) {
    let Some(destination) = state.markers.get(marker_id).map(|m| m.coordinate) else {
        log::debug!("Routenziel {} nicht vorhanden", marker_id);
        return;
    };

    match state.routing.select_destination(marker_id, destination) {
        Some(request) => dispatch(state, request),
        None => log::debug!("Zielauswahl ignoriert: Routing inaktiv"),
    }
}

/// Wechselt die Fortbewegungsart; ein vorhandenes Ergebnis wird verworfen und neu berechnet.
pub fn set_travel_mode(state: &mut AppState, mode: TravelMode) {
    if !state.routing.is_active() {
        log::debug!("Moduswechsel ignoriert: Routing inaktiv");
        return;
    }

    log::info!("Fortbewegungsart: {}", mode.label());
    if let Some(request) = state.routing.set_travel_mode(mode) {
        dispatch(state, request);
    }
}

fn dispatch(state: &mut AppState, request: RouteRequest) {
    clear_route_notice(state);
    log::info!(
        "Route angefragt: {} → {} ({})",
        request.origin,
        request.destination,
        request.travel_mode.label()
    );
    state.push_host_request(HostRequest::ComputeRoute(request));
}

/// Übernimmt ein Ergebnis, sofern es zum aktuellen Tripel passt, und passt den
/// Kartenausschnitt an die Route an. Veraltete Ergebnisse werden still verworfen.
pub fn accept_result(state: &mut AppState, result: RouteResult) -> bool {
    let mut bounds = result.polyline.clone();
    bounds.push(result.request.origin);
    bounds.push(result.request.destination);
    let summary = format!(
        "{}, {} ({})",
        result.distance_label(),
        result.duration_label(),
        result.travel_mode().label()
    );

    if !state.routing.accept_result(result) {
        log::debug!("Veraltetes Routen-Ergebnis verworfen ({})", summary);
        return false;
    }

    clear_route_notice(state);
    if let Some(region) = MapRegion::fit(&bounds, state.options.route_edge_padding) {
        state.view.region = Some(region);
    }
    log::info!("Route berechnet: {}", summary);
    true
}

/// Verbucht einen Fehlschlag der Berechnung. Routing bleibt aktiv.
///
/// Fehler zu veralteten Anfragen werden ignoriert (`Ok`).
pub fn fail(state: &mut AppState, request: &RouteRequest, message: &str) -> Result<(), AppError> {
    if !state.routing.fail(request, message) {
        log::debug!("Fehler zu veralteter Routen-Anfrage ignoriert: {}", message);
        return Ok(());
    }
    log::warn!("Routenberechnung fehlgeschlagen: {}", message);
    Err(AppError::RouteComputationFailed(message.to_string()))
}
