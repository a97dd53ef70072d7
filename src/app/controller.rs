//! Application Controller für zentrale Event-Verarbeitung.

use super::view_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::ViewScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Standort & Karte ===
            AppCommand::RequestLocationPermission => handlers::location::request_permission(state),
            AppCommand::ApplyLocationPermission { granted } => {
                handlers::location::apply_permission(state, granted)
            }
            AppCommand::FetchLocation => handlers::location::fetch(state),
            AppCommand::SetLocation { coordinate } => handlers::location::set(state, coordinate),
            AppCommand::RecenterOnLocation => handlers::location::recenter(state),
            AppCommand::SetRegion { region } => handlers::location::set_region(state, region),
            AppCommand::ReportError { error } => handlers::dialog::report_error(state, error),
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),

            // === Marker ===
            AppCommand::RequestMarkerPlacement => handlers::markers::request_placement(state),
            AppCommand::AddMarker {
                coordinate,
                address,
                timestamp_ms,
            } => handlers::markers::add(state, coordinate, address, timestamp_ms),
            AppCommand::InspectMarker { marker_id } => handlers::markers::inspect(state, marker_id),
            AppCommand::CloseInspection => handlers::markers::close_inspection(state),
            AppCommand::RemoveMarker { marker_id } => handlers::markers::remove(state, marker_id),
            AppCommand::RequestRemoveLastMarker => handlers::dialog::request_remove_last(state),
            AppCommand::ConfirmRemoveLastMarker => handlers::dialog::confirm_remove_last(state),
            AppCommand::CancelRemoveLastMarker => handlers::dialog::cancel_remove_last(state),
            AppCommand::ShareMarker { marker_id } => handlers::markers::share(state, marker_id),
            AppCommand::SelectCategory { category } => {
                handlers::markers::select_category(state, category)
            }

            // === Routing ===
            AppCommand::StartRouting => handlers::routing::start(state),
            AppCommand::StopRouting => handlers::routing::stop(state),
            AppCommand::SelectRouteDestination { marker_id } => {
                handlers::routing::select_destination(state, marker_id)
            }
            AppCommand::SetTravelMode { mode } => handlers::routing::set_travel_mode(state, mode),
            AppCommand::AcceptRoute { result } => handlers::routing::accept(state, result),
            AppCommand::RejectRoute { request, message } => {
                handlers::routing::reject(state, request, &message)
            }
        }

        Ok(())
    }

    /// Baut die abgeleitete View-Szene für die Anzeige.
    pub fn build_view_scene(&self, state: &AppState) -> ViewScene {
        view_scene::build(state)
    }
}
