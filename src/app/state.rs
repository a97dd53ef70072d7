//! Application State: zentrale Datenhaltung.
//!
//! Ein einziger, explizit besessener Zustand pro Anwendung; die Anzeige liest
//! nur die daraus gebaute `ViewScene`.

mod markers;
mod routing;

pub use markers::MarkerStore;
pub use routing::{RoutePhase, RouteSession};

use super::{CommandLog, HostRequest};
use crate::core::{AppError, Coordinate, MapRegion, MarkerCategory, MarkerId};
use crate::shared::AppOptions;

/// Ergebnis der Standort-Berechtigungsanfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Noch nicht angefragt
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// Standortbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct LocationState {
    pub permission: PermissionStatus,
    /// Zuletzt bekannter Gerätestandort
    pub current: Option<Coordinate>,
    /// Ob die Karte bereits einmal auf den Standort zentriert wurde
    pub centered: bool,
}

impl LocationState {
    /// Erstellt einen Zustand ohne bekannten Standort.
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktueller Kartenausschnitt (None = Anzeige-Standard)
    pub region: Option<MapRegion>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self { region: None }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktueller Hinweis (nicht-fatale Fehler)
    pub notice: Option<AppError>,
    /// Marker, dessen Details geöffnet sind
    pub inspected_marker: Option<MarkerId>,
    /// Marker, für den "letzten Marker entfernen" auf Bestätigung wartet
    pub pending_removal: Option<MarkerId>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (keine Dialoge offen).
    pub fn new() -> Self {
        Self {
            notice: None,
            inspected_marker: None,
            pending_removal: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle platzierten Marker
    pub markers: MarkerStore,
    /// Kategorie für neue Marker
    pub selected_category: MarkerCategory,
    /// Routen-Sitzung
    pub routing: RouteSession,
    /// Standort-State
    pub location: LocationState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Aufträge an den Host (Standort, Geocoding, Routen, Teilen)
    host_requests: Vec<HostRequest>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            markers: MarkerStore::new(),
            selected_category: options.default_category,
            routing: RouteSession::new(),
            location: LocationState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            host_requests: Vec::new(),
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Aktuelle Phase der Routen-Sitzung.
    pub fn route_phase(&self) -> RoutePhase {
        self.routing.phase()
    }

    /// Reiht einen Auftrag für den Host ein.
    pub fn push_host_request(&mut self, request: HostRequest) {
        self.host_requests.push(request);
    }

    /// Liefert eine read-only Sicht auf ausstehende Host-Aufträge.
    pub fn pending_host_requests(&self) -> &[HostRequest] {
        &self.host_requests
    }

    /// Entnimmt alle ausstehenden Host-Aufträge (Host ruft dies pro Event-Durchlauf auf).
    pub fn take_host_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.host_requests)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
