//! Directions-Anbindung: URL-Aufbau, Antwort-Dekodierung, Offline-Schätzung.

use super::providers::{DirectionsProvider, DirectionsTransport};
use crate::core::{Coordinate, RouteRequest, RouteResult};
use crate::shared::AppOptions;
use serde::Deserialize;

/// Basis-URL des Directions-JSON-Endpunkts.
pub const DIRECTIONS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Fehlermeldung, wenn kein API-Schlüssel konfiguriert ist.
pub const MISSING_KEY_MESSAGE: &str = "Directions API key is not configured";

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,
    overview_polyline: ApiPolyline,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    distance: ApiValue,
    duration: ApiValue,
}

#[derive(Debug, Deserialize)]
struct ApiValue {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct ApiPolyline {
    points: String,
}

/// Baut die Anfrage-URL für ein Tripel.
pub fn directions_url(
    request: &RouteRequest,
    api_key: &str,
    language: &str,
) -> anyhow::Result<String> {
    let origin = format!(
        "{},{}",
        request.origin.latitude, request.origin.longitude
    );
    let destination = format!(
        "{},{}",
        request.destination.latitude, request.destination.longitude
    );
    let url = url::Url::parse_with_params(
        DIRECTIONS_ENDPOINT,
        &[
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
            ("key", api_key),
            ("mode", request.travel_mode.api_name()),
            ("language", language),
        ],
    )?;
    Ok(url.into())
}

/// Dekodiert eine Directions-JSON-Antwort für die übergebene Anfrage.
///
/// Distanzen der Legs (Meter) und Dauern (Sekunden) werden aufsummiert und in
/// km bzw. Minuten umgerechnet. Status ungleich `OK` ergibt eine Fehlermeldung.
pub fn parse_directions_response(body: &str, request: &RouteRequest) -> Result<RouteResult, String> {
    let response: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| format!("Invalid directions response: {}", e))?;

    if response.status != "OK" {
        return Err(match response.error_message {
            Some(msg) => format!("{}: {}", response.status, msg),
            None => response.status,
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| "Directions response contains no route".to_string())?;

    let distance_m: f64 = route.legs.iter().map(|l| l.distance.value).sum();
    let duration_s: f64 = route.legs.iter().map(|l| l.duration.value).sum();
    let polyline = decode_polyline(&route.overview_polyline.points)?;

    Ok(RouteResult {
        request: *request,
        distance_km: distance_m / 1000.0,
        duration_minutes: duration_s / 60.0,
        polyline,
    })
}

/// Dekodiert eine Encoded Polyline (Präzision 1e-5).
///
/// Punkte außerhalb des WGS84-Wertebereichs machen die ganze Polyline ungültig.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, String> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        lat += next_delta(bytes, &mut index)?;
        lng += next_delta(bytes, &mut index)?;
        let point = Coordinate::new(lat as f64 * 1e-5, lng as f64 * 1e-5)
            .map_err(|e| format!("Polyline point out of range: {}", e))?;
        points.push(point);
    }

    Ok(points)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, String> {
    let mut result: i64 = 0;
    let mut shift = 0;
    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err("Truncated polyline".to_string());
        };
        *index += 1;
        let chunk = i64::from(byte) - 63;
        if !(0..64).contains(&chunk) || shift > 30 {
            return Err(format!("Invalid polyline character at {}", *index - 1));
        }
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }
    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Directions-Dienst über einen vom Host gelieferten HTTP-Transport.
///
/// Ohne API-Schlüssel scheitert jede Berechnung; alles andere bleibt nutzbar.
pub struct GoogleDirections<T> {
    transport: T,
    api_key: Option<String>,
    language: String,
}

impl<T: DirectionsTransport> GoogleDirections<T> {
    /// Erstellt den Provider mit Schlüssel und Sprache aus den Optionen.
    pub fn new(transport: T, options: &AppOptions) -> Self {
        Self {
            transport,
            api_key: options.api_key().map(str::to_string),
            language: options.language.clone(),
        }
    }
}

impl<T: DirectionsTransport> DirectionsProvider for GoogleDirections<T> {
    fn compute(&mut self, request: &RouteRequest) -> Result<RouteResult, String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(MISSING_KEY_MESSAGE.to_string());
        };
        let url = directions_url(request, api_key, &self.language).map_err(|e| e.to_string())?;
        let body = self
            .transport
            .fetch(&url)
            .map_err(|e| format!("Directions request failed: {:#}", e))?;
        parse_directions_response(&body, request)
    }
}

/// Offline-Schätzung: Großkreis-Distanz und mittlere Geschwindigkeit je Modus.
#[derive(Debug, Clone)]
pub struct EstimatedDirections {
    driving_kmh: f64,
    walking_kmh: f64,
    transit_kmh: f64,
}

impl EstimatedDirections {
    /// Übernimmt die Geschwindigkeiten aus den Optionen.
    pub fn from_options(options: &AppOptions) -> Self {
        use crate::core::TravelMode;
        Self {
            driving_kmh: options.speed_kmh(TravelMode::Driving),
            walking_kmh: options.speed_kmh(TravelMode::Walking),
            transit_kmh: options.speed_kmh(TravelMode::Transit),
        }
    }
}

impl DirectionsProvider for EstimatedDirections {
    fn compute(&mut self, request: &RouteRequest) -> Result<RouteResult, String> {
        use crate::core::TravelMode;
        let speed = match request.travel_mode {
            TravelMode::Driving => self.driving_kmh,
            TravelMode::Walking => self.walking_kmh,
            TravelMode::Transit => self.transit_kmh,
        };
        if speed <= 0.0 {
            return Err(format!(
                "No speed configured for {}",
                request.travel_mode.api_name()
            ));
        }

        let distance_km = request.origin.distance_km(&request.destination);
        Ok(RouteResult {
            request: *request,
            distance_km,
            duration_minutes: distance_km / speed * 60.0,
            polyline: vec![request.origin, request.destination],
        })
    }
}
