//! Builder für View-Szenen aus dem AppState.

use crate::app::state::PermissionStatus;
use crate::app::AppState;
use crate::shared::{ControlPanel, RemovalPrompt, RouteOverlay, RouteSummaryView, ViewScene};

/// Baut eine ViewScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> ViewScene {
    let routing = &state.routing;
    let routing_active = routing.is_active();

    let control_panel = if routing_active {
        ControlPanel::Routing {
            travel_mode: routing.travel_mode(),
        }
    } else {
        ControlPanel::CategoryPicker {
            selected: state.selected_category,
        }
    };

    // Die Session speichert nur Ergebnisse zum aktuellen Tripel
    let route_summary = routing.result().map(|result| RouteSummaryView {
        distance: result.distance_label(),
        duration: result.duration_label(),
        travel_mode: result.travel_mode(),
    });

    let route_overlay = routing.origin().map(|origin| RouteOverlay {
        origin,
        destination: routing.destination(),
        polyline: routing
            .result()
            .map(|r| r.polyline.clone())
            .unwrap_or_default(),
    });

    let inspected_marker = if routing_active {
        None
    } else {
        state
            .ui
            .inspected_marker
            .and_then(|id| state.markers.get(id))
            .cloned()
    };

    let removal_prompt = state
        .ui
        .pending_removal
        .and_then(|id| state.markers.get(id))
        .map(|m| RemovalPrompt {
            marker_id: m.id,
            title: m.title.clone(),
        });

    ViewScene {
        markers: state.markers.snapshot(),
        callouts_enabled: !routing_active,
        control_panel,
        route_summary,
        route_overlay,
        route_loading: state.route_phase() == super::state::RoutePhase::AwaitingResult,
        route_error: routing.last_error().map(str::to_string),
        current_location: state.location.current,
        region: state.view.region,
        inspected_marker,
        removal_prompt,
        notice: state.ui.notice.as_ref().map(|e| e.to_string()),
        can_add_marker: state.location.permission != PermissionStatus::Denied,
    }
}
