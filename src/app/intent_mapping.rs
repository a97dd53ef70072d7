//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::AppError;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AppStarted => vec![AppCommand::RequestLocationPermission],
        AppIntent::LocationPermissionResolved { granted: true } => vec![
            AppCommand::ApplyLocationPermission { granted: true },
            AppCommand::FetchLocation,
        ],
        AppIntent::LocationPermissionResolved { granted: false } => {
            vec![AppCommand::ApplyLocationPermission { granted: false }]
        }
        AppIntent::LocationReceived { coordinate } => vec![AppCommand::SetLocation { coordinate }],
        AppIntent::LocationFailed => vec![AppCommand::ReportError {
            error: AppError::LocationUnavailable,
        }],
        AppIntent::RecenterRequested => vec![AppCommand::RecenterOnLocation],
        AppIntent::MapRegionChanged { region } => vec![AppCommand::SetRegion { region }],

        AppIntent::AddMarkerRequested => vec![AppCommand::RequestMarkerPlacement],
        AppIntent::MarkerPlacementResolved {
            coordinate,
            address,
            timestamp_ms,
        } => vec![
            AppCommand::SetLocation { coordinate },
            AppCommand::AddMarker {
                coordinate,
                address,
                timestamp_ms,
            },
        ],
        AppIntent::MarkerPlacementFailed { error } => vec![AppCommand::ReportError { error }],
        // Marker-Tap ist polymorph über den Routing-Modus:
        // inaktiv → Details, aktiv → Routenziel
        AppIntent::MarkerTapped { marker_id } => {
            if state.routing.is_active() {
                vec![AppCommand::SelectRouteDestination { marker_id }]
            } else {
                vec![AppCommand::InspectMarker { marker_id }]
            }
        }
        AppIntent::MarkerInspectionClosed => vec![AppCommand::CloseInspection],
        AppIntent::RemoveMarkerRequested { marker_id } => {
            vec![AppCommand::RemoveMarker { marker_id }]
        }
        AppIntent::RemoveLastMarkerRequested => vec![AppCommand::RequestRemoveLastMarker],
        AppIntent::RemoveLastMarkerConfirmed => vec![AppCommand::ConfirmRemoveLastMarker],
        AppIntent::RemoveLastMarkerCancelled => vec![AppCommand::CancelRemoveLastMarker],
        AppIntent::ShareMarkerRequested { marker_id } => {
            vec![AppCommand::ShareMarker { marker_id }]
        }
        AppIntent::CategorySelected { category } => vec![AppCommand::SelectCategory { category }],

        AppIntent::StartRoutingRequested => vec![AppCommand::StartRouting],
        AppIntent::StopRoutingRequested => vec![AppCommand::StopRouting],
        AppIntent::TravelModeSelected { mode } => vec![AppCommand::SetTravelMode { mode }],
        AppIntent::RouteComputed { result } => vec![AppCommand::AcceptRoute { result }],
        AppIntent::RouteFailed { request, message } => {
            vec![AppCommand::RejectRoute { request, message }]
        }

        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
    }
}
