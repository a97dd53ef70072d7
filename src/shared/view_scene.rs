//! View-Szene als expliziter Übergabevertrag zwischen App und Kartenanzeige.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Anzeige sie konsumiert.
//! Wird bei jeder Zustandsänderung neu gebaut und nie separat gespeichert.

use crate::core::{Coordinate, MapRegion, Marker, MarkerCategory, MarkerId, TravelMode};

/// Welches Bedien-Panel sichtbar ist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanel {
    /// Kategorie-Auswahl (Routing inaktiv), hervorgehoben: `selected`
    CategoryPicker { selected: MarkerCategory },
    /// Modus-Auswahl + "Routing beenden" (Routing aktiv)
    Routing { travel_mode: TravelMode },
}

/// Routen-Zusammenfassung für das Info-Panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummaryView {
    /// z.B. `"5.0 km"`
    pub distance: String,
    /// z.B. `"12 min"`
    pub duration: String,
    pub travel_mode: TravelMode,
}

/// Routen-Overlay auf der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub origin: Coordinate,
    pub destination: Option<Coordinate>,
    /// Leer, solange kein (aktuelles) Ergebnis vorliegt
    pub polyline: Vec<Coordinate>,
}

/// Bestätigungsdialog für "letzten Marker entfernen".
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalPrompt {
    pub marker_id: MarkerId,
    pub title: String,
}

/// Read-only Daten für einen Anzeige-Durchlauf.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewScene {
    /// Sichtbare Marker (immer alle, in Einfügereihenfolge)
    pub markers: Vec<Marker>,
    /// Marker-Callouts antippbar (deaktiviert während Routing)
    pub callouts_enabled: bool,
    pub control_panel: ControlPanel,
    /// Nur bei aktuellem (nicht veraltetem) Ergebnis
    pub route_summary: Option<RouteSummaryView>,
    pub route_overlay: Option<RouteOverlay>,
    /// Routenberechnung läuft
    pub route_loading: bool,
    /// Meldung der zuletzt fehlgeschlagenen Berechnung (Routing bleibt aktiv)
    pub route_error: Option<String>,
    pub current_location: Option<Coordinate>,
    pub region: Option<MapRegion>,
    /// Marker-Details (Anzeigen / Entfernen / Teilen)
    pub inspected_marker: Option<Marker>,
    pub removal_prompt: Option<RemovalPrompt>,
    /// Aktueller Hinweistext
    pub notice: Option<String>,
    /// Marker-Platzierung möglich (Standortzugriff nicht verweigert)
    pub can_add_marker: bool,
}

impl ViewScene {
    /// Gibt zurück, ob das Routen-Info-Panel angezeigt wird.
    pub fn shows_route_summary(&self) -> bool {
        self.route_summary.is_some()
    }
}
