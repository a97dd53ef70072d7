use crate::core::{AppError, Coordinate, MapRegion, MarkerCategory, MarkerId};
use crate::core::{RouteRequest, RouteResult, TravelMode};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Standort-Berechtigung beim Host anfragen
    RequestLocationPermission,
    /// Antwort der Berechtigungsanfrage übernehmen
    ApplyLocationPermission { granted: bool },
    /// Standort beim Host anfragen
    FetchLocation,
    /// Gerätestandort setzen (zentriert beim ersten Fix)
    SetLocation { coordinate: Coordinate },
    /// Karte auf den aktuellen Standort zentrieren
    RecenterOnLocation,
    /// Kartenausschnitt übernehmen
    SetRegion { region: MapRegion },
    /// Nicht-fatalen Fehler als Hinweis anzeigen
    ReportError { error: AppError },
    /// Hinweis schließen
    DismissNotice,

    /// Standort + Adresse für neuen Marker beim Host anfragen
    RequestMarkerPlacement,
    /// Marker mit aktueller Kategorie anlegen
    AddMarker {
        coordinate: Coordinate,
        address: Option<String>,
        timestamp_ms: i64,
    },
    /// Marker-Details öffnen
    InspectMarker { marker_id: MarkerId },
    /// Marker-Details schließen
    CloseInspection,
    /// Marker entfernen (No-op wenn nicht vorhanden)
    RemoveMarker { marker_id: MarkerId },
    /// Bestätigung für "letzten Marker entfernen" anfordern
    RequestRemoveLastMarker,
    /// Bestätigtes Entfernen ausführen
    ConfirmRemoveLastMarker,
    /// Entfernen abbrechen
    CancelRemoveLastMarker,
    /// Marker an den Host zum Teilen übergeben
    ShareMarker { marker_id: MarkerId },
    /// Kategorie für neue Marker setzen
    SelectCategory { category: MarkerCategory },

    /// Routing mit aktuellem Standort als Start aktivieren
    StartRouting,
    /// Routen-Sitzung zurücksetzen
    StopRouting,
    /// Marker als Routenziel wählen
    SelectRouteDestination { marker_id: MarkerId },
    /// Fortbewegungsart setzen
    SetTravelMode { mode: TravelMode },
    /// Berechnete Route übernehmen (veraltete werden verworfen)
    AcceptRoute { result: RouteResult },
    /// Fehlgeschlagene Routenberechnung verbuchen
    RejectRoute {
        request: RouteRequest,
        message: String,
    },
}
