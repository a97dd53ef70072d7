//! Map Markers Library.
//! Zustandsverwaltung für Karten-Marker und Routen, als Library exportiert für Tests und Hosts.

pub mod app;
pub mod bridge;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, HostRequest, PermissionStatus, RoutePhase,
    UiState, ViewState,
};
pub use bridge::HostBridge;
pub use core::{
    AddressComponents, AppError, Coordinate, MapRegion, Marker, MarkerCategory, MarkerId,
    RouteRequest, RouteResult, TravelMode,
};
pub use shared::{AppOptions, SharePayload, ViewScene};
