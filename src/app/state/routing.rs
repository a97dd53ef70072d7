//! Routen-Sitzung: Zustandsautomat Idle → Selecting → AwaitingResult → Showing.

use crate::core::{Coordinate, MarkerId, RouteRequest, RouteResult, TravelMode};

/// Abgeleitete Phase der Routen-Sitzung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePhase {
    /// Routing inaktiv
    Idle,
    /// Routing aktiv, wartet auf Zielauswahl (oder Neuversuch nach Fehler)
    Selecting,
    /// Anfrage für das aktuelle Tripel ausstehend
    AwaitingResult,
    /// Aktuelles Ergebnis wird angezeigt
    Showing,
}

/// Flüchtige Routen-Sitzung (existiert nur bei aktivem Routing).
///
/// Invariante: `result` gehört immer zum aktuellen (Start, Ziel, Modus)-Tripel.
/// Jede Änderung an Ziel oder Modus verwirft das Ergebnis.
#[derive(Debug, Clone, Default)]
pub struct RouteSession {
    active: bool,
    /// Beim Start festgehaltener Standort (wird nicht nachgeführt)
    origin: Option<Coordinate>,
    destination: Option<Coordinate>,
    destination_marker: Option<MarkerId>,
    travel_mode: TravelMode,
    /// Zuletzt ausgelöste, noch unbeantwortete Anfrage
    in_flight: Option<RouteRequest>,
    result: Option<RouteResult>,
    last_error: Option<String>,
}

impl RouteSession {
    /// Erstellt eine inaktive Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiviert Routing mit festem Startpunkt; Ziel, Ergebnis und Modus
    /// (zurück auf `Driving`) werden zurückgesetzt.
    pub fn start(&mut self, origin: Coordinate) {
        *self = Self {
            active: true,
            origin: Some(origin),
            ..Self::default()
        };
    }

    /// Setzt die Sitzung vollständig zurück (idempotent).
    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Setzt das Ziel und gibt die neu auszulösende Anfrage zurück.
    ///
    /// Bei inaktivem Routing: keine Änderung, `None`.
    pub fn select_destination(
        &mut self,
        marker_id: MarkerId,
        destination: Coordinate,
    ) -> Option<RouteRequest> {
        if !self.active {
            return None;
        }
        self.destination = Some(destination);
        self.destination_marker = Some(marker_id);
        self.dispatch()
    }

    /// Wechselt den Modus; mit gesetztem Ziel wird eine neue Anfrage zurückgegeben.
    ///
    /// Bei inaktivem Routing: keine Änderung, `None`.
    pub fn set_travel_mode(&mut self, travel_mode: TravelMode) -> Option<RouteRequest> {
        if !self.active {
            return None;
        }
        self.travel_mode = travel_mode;
        self.dispatch()
    }

    fn dispatch(&mut self) -> Option<RouteRequest> {
        self.result = None;
        self.last_error = None;
        self.in_flight = self.current_request();
        self.in_flight
    }

    /// Das aktuelle (Start, Ziel, Modus)-Tripel, sofern ein Ziel gesetzt ist.
    pub fn current_request(&self) -> Option<RouteRequest> {
        if !self.active {
            return None;
        }
        Some(RouteRequest {
            origin: self.origin?,
            destination: self.destination?,
            travel_mode: self.travel_mode,
        })
    }

    /// Übernimmt ein Ergebnis, wenn es zum aktuellen Tripel passt.
    ///
    /// Gibt `false` zurück (und verwirft das Ergebnis) für veraltete Antworten.
    pub fn accept_result(&mut self, result: RouteResult) -> bool {
        if self.current_request() != Some(result.request) {
            return false;
        }
        self.in_flight = None;
        self.last_error = None;
        self.result = Some(result);
        true
    }

    /// Verbucht einen Fehlschlag, wenn er zum aktuellen Tripel passt.
    ///
    /// Routing bleibt aktiv (Phase `Selecting`), damit der Nutzer neu wählen kann.
    pub fn fail(&mut self, request: &RouteRequest, message: &str) -> bool {
        if self.current_request().as_ref() != Some(request) {
            return false;
        }
        self.in_flight = None;
        self.result = None;
        self.last_error = Some(message.to_string());
        true
    }

    /// Leitet die aktuelle Phase aus dem Zustand ab.
    pub fn phase(&self) -> RoutePhase {
        if !self.active {
            RoutePhase::Idle
        } else if self.result.is_some() {
            RoutePhase::Showing
        } else if self.in_flight.is_some() {
            RoutePhase::AwaitingResult
        } else {
            RoutePhase::Selecting
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    pub fn destination_marker(&self) -> Option<MarkerId> {
        self.destination_marker
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub fn result(&self) -> Option<&RouteResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn result_for(request: RouteRequest) -> RouteResult {
        RouteResult {
            request,
            distance_km: 5.0,
            duration_minutes: 12.0,
            polyline: vec![request.origin, request.destination],
        }
    }

    #[test]
    fn full_cycle_walks_through_all_phases() {
        let mut session = RouteSession::new();
        assert_eq!(session.phase(), RoutePhase::Idle);

        session.start(coord(37.0, -122.0));
        assert_eq!(session.phase(), RoutePhase::Selecting);

        let request = session
            .select_destination(MarkerId(1), coord(37.1, -122.1))
            .expect("Anfrage erwartet");
        assert_eq!(session.phase(), RoutePhase::AwaitingResult);

        assert!(session.accept_result(result_for(request)));
        assert_eq!(session.phase(), RoutePhase::Showing);

        session.stop();
        assert_eq!(session.phase(), RoutePhase::Idle);
        assert!(session.destination().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn mode_change_rejects_late_result_for_previous_mode() {
        let mut session = RouteSession::new();
        session.start(coord(37.0, -122.0));
        let driving = session
            .select_destination(MarkerId(1), coord(37.1, -122.1))
            .unwrap();

        let walking = session.set_travel_mode(TravelMode::Walking).unwrap();
        assert_eq!(walking.travel_mode, TravelMode::Walking);

        assert!(!session.accept_result(result_for(driving)));
        assert_eq!(session.phase(), RoutePhase::AwaitingResult);

        assert!(session.accept_result(result_for(walking)));
        assert_eq!(session.result().unwrap().travel_mode(), TravelMode::Walking);
    }

    #[test]
    fn mode_change_without_destination_issues_no_request() {
        let mut session = RouteSession::new();
        session.start(coord(1.0, 1.0));
        assert!(session.set_travel_mode(TravelMode::Transit).is_none());
        assert_eq!(session.travel_mode(), TravelMode::Transit);
        assert_eq!(session.phase(), RoutePhase::Selecting);
    }

    #[test]
    fn inactive_session_ignores_destination_and_mode() {
        let mut session = RouteSession::new();
        assert!(session
            .select_destination(MarkerId(1), coord(1.0, 1.0))
            .is_none());
        assert!(session.set_travel_mode(TravelMode::Walking).is_none());
        assert_eq!(session.travel_mode(), TravelMode::Driving);
        assert_eq!(session.phase(), RoutePhase::Idle);
    }

    #[test]
    fn failure_returns_to_selecting_and_keeps_destination() {
        let mut session = RouteSession::new();
        session.start(coord(37.0, -122.0));
        let request = session
            .select_destination(MarkerId(7), coord(37.1, -122.1))
            .unwrap();

        assert!(session.fail(&request, "ZERO_RESULTS"));
        assert_eq!(session.phase(), RoutePhase::Selecting);
        assert_eq!(session.last_error(), Some("ZERO_RESULTS"));
        assert_eq!(session.destination_marker(), Some(MarkerId(7)));

        // Neuversuch über Moduswechsel
        assert!(session.set_travel_mode(TravelMode::Walking).is_some());
        assert_eq!(session.phase(), RoutePhase::AwaitingResult);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut session = RouteSession::new();
        session.start(coord(37.0, -122.0));
        let first = session
            .select_destination(MarkerId(1), coord(37.1, -122.1))
            .unwrap();
        let second = session
            .select_destination(MarkerId(2), coord(37.2, -122.2))
            .unwrap();

        assert!(!session.fail(&first, "timeout"));
        assert_eq!(session.phase(), RoutePhase::AwaitingResult);
        assert!(session.accept_result(result_for(second)));
    }

    #[test]
    fn restart_resets_mode_and_destination() {
        let mut session = RouteSession::new();
        session.start(coord(37.0, -122.0));
        session.set_travel_mode(TravelMode::Transit);
        session.select_destination(MarkerId(1), coord(37.1, -122.1));

        session.start(coord(38.0, -121.0));
        assert_eq!(session.travel_mode(), TravelMode::Driving);
        assert!(session.destination().is_none());
        assert_eq!(session.origin(), Some(coord(38.0, -121.0)));
    }
}
