//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Marker, Routing, Standort, UI).
pub mod state;
pub mod use_cases;
pub mod view_scene;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, HostRequest};
pub use state::{
    AppState, LocationState, MarkerStore, PermissionStatus, RoutePhase, RouteSession, UiState,
    ViewState,
};
pub use view_scene::build as build_view_scene;
