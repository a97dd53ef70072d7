use crate::core::{AppError, Coordinate, MapRegion, MarkerCategory, MarkerId};
use crate::core::{RouteRequest, RouteResult, TravelMode};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/Kollaborateuren ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung gestartet (Berechtigung anfragen)
    AppStarted,
    /// Berechtigungsdialog beantwortet
    LocationPermissionResolved { granted: bool },
    /// Standort ermittelt
    LocationReceived { coordinate: Coordinate },
    /// Standort konnte nicht ermittelt werden
    LocationFailed,
    /// Karte erneut auf den aktuellen Standort zentrieren
    RecenterRequested,
    /// Kartenausschnitt hat sich nach Geste gesetzt
    MapRegionChanged { region: MapRegion },

    /// "Marker hinzufügen" gedrückt
    AddMarkerRequested,
    /// Standort und (optional) Adresse für den neuen Marker liegen vor
    MarkerPlacementResolved {
        coordinate: Coordinate,
        /// None = Geocoding fehlgeschlagen → Platzhalter
        address: Option<String>,
        timestamp_ms: i64,
    },
    /// Marker-Platzierung gescheitert (Standort/Berechtigung)
    MarkerPlacementFailed { error: AppError },
    /// Marker auf der Karte angetippt
    MarkerTapped { marker_id: MarkerId },
    /// Marker-Details geschlossen
    MarkerInspectionClosed,
    /// Marker entfernen (aus den Details)
    RemoveMarkerRequested { marker_id: MarkerId },
    /// "Letzten Marker entfernen" gedrückt (öffnet Bestätigung)
    RemoveLastMarkerRequested,
    /// Entfernen bestätigt
    RemoveLastMarkerConfirmed,
    /// Entfernen abgebrochen
    RemoveLastMarkerCancelled,
    /// Marker teilen
    ShareMarkerRequested { marker_id: MarkerId },
    /// Kategorie in der Auswahl angetippt
    CategorySelected { category: MarkerCategory },

    /// Routing starten
    StartRoutingRequested,
    /// Routing beenden
    StopRoutingRequested,
    /// Fortbewegungsart gewählt
    TravelModeSelected { mode: TravelMode },
    /// Directions-Dienst hat eine Route geliefert
    RouteComputed { result: RouteResult },
    /// Directions-Dienst meldet einen Fehler für eine Anfrage
    RouteFailed {
        request: RouteRequest,
        message: String,
    },

    /// Hinweis geschlossen
    NoticeDismissed,
}
