use super::providers::{DirectionsProvider, Geocoder, LocationProvider, ShareSink};
use crate::app::{AppController, AppIntent, AppState, HostRequest, PermissionStatus};

/// Obergrenze für Durchläufe in `run_until_idle` (schützt vor Auftrags-Schleifen).
const MAX_ROUNDS: usize = 64;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Bedient Host-Aufträge mit konkreten Kollaborateuren.
///
/// Kollaborator-Fehler werden hier abgefangen und in Intents übersetzt;
/// sie gelangen nie als rohe Fehler in den Controller.
pub struct HostBridge<L, G, D, S> {
    pub location: L,
    pub geocoder: G,
    pub directions: D,
    pub share_sink: S,
    clock: Box<dyn Fn() -> i64>,
}

impl<L, G, D, S> HostBridge<L, G, D, S>
where
    L: LocationProvider,
    G: Geocoder,
    D: DirectionsProvider,
    S: ShareSink,
{
    /// Erstellt die Bridge mit Systemuhr.
    pub fn new(location: L, geocoder: G, directions: D, share_sink: S) -> Self {
        Self {
            location,
            geocoder,
            directions,
            share_sink,
            clock: Box::new(now_ms),
        }
    }

    /// Ersetzt die Uhr (Zeitstempel neuer Marker), z.B. für Tests.
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Bedient einen einzelnen Auftrag und liefert das Rückmelde-Intent.
    pub fn serve(&mut self, request: HostRequest) -> Option<AppIntent> {
        match request {
            HostRequest::RequestPermission => {
                let granted = self.location.request_permission() == PermissionStatus::Granted;
                Some(AppIntent::LocationPermissionResolved { granted })
            }
            HostRequest::FetchLocation => match self.location.current_position() {
                Ok(coordinate) => Some(AppIntent::LocationReceived { coordinate }),
                Err(e) => {
                    log::warn!("Standort nicht verfügbar: {}", e);
                    Some(AppIntent::LocationFailed)
                }
            },
            HostRequest::ResolvePlacement => Some(self.resolve_placement()),
            HostRequest::ComputeRoute(request) => match self.directions.compute(&request) {
                Ok(result) => Some(AppIntent::RouteComputed { result }),
                Err(message) => Some(AppIntent::RouteFailed { request, message }),
            },
            HostRequest::Share(payload) => {
                if let Err(e) = self.share_sink.share(&payload) {
                    log::warn!("Teilen fehlgeschlagen: {:#}", e);
                }
                None
            }
        }
    }

    fn resolve_placement(&mut self) -> AppIntent {
        let coordinate = match self.location.current_position() {
            Ok(c) => c,
            Err(error) => return AppIntent::MarkerPlacementFailed { error },
        };

        let address = match self.geocoder.reverse_geocode(coordinate) {
            Ok(components) => components.format(),
            Err(e) => {
                log::warn!("{} für {}", e, coordinate);
                None
            }
        };

        AppIntent::MarkerPlacementResolved {
            coordinate,
            address,
            timestamp_ms: (self.clock)(),
        }
    }

    /// Arbeitet alle Aufträge ab, bis keine neuen mehr entstehen.
    ///
    /// Gibt die Anzahl bedienter Aufträge zurück.
    pub fn run_until_idle(
        &mut self,
        controller: &mut AppController,
        state: &mut AppState,
    ) -> anyhow::Result<usize> {
        let mut served = 0;
        for _ in 0..MAX_ROUNDS {
            let requests = state.take_host_requests();
            if requests.is_empty() {
                return Ok(served);
            }
            for request in requests {
                served += 1;
                if let Some(intent) = self.serve(request) {
                    controller.handle_intent(state, intent)?;
                }
            }
        }
        anyhow::bail!("Host-Aufträge nach {} Durchläufen nicht abgearbeitet", MAX_ROUNDS)
    }
}

