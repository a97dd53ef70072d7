//! Zentrale Konfiguration.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{MarkerCategory, TravelMode};
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Breiten-Ausdehnung beim ersten Zentrieren auf den Standort (Grad).
pub const INITIAL_LATITUDE_DELTA: f64 = 0.0922;
/// Längen-Ausdehnung beim ersten Zentrieren auf den Standort (Grad).
pub const INITIAL_LONGITUDE_DELTA: f64 = 0.0421;
/// Relativer Rand beim Einpassen einer berechneten Route.
pub const ROUTE_EDGE_PADDING: f64 = 0.2;

// ── Marker ──────────────────────────────────────────────────────────

/// Platzhalter, wenn das Rückwärts-Geocoding keine Adresse liefert.
pub const ADDRESS_PLACEHOLDER: &str = "Address unavailable";

// ── Geschätzte Routen (offline) ─────────────────────────────────────

/// Durchschnittsgeschwindigkeit Auto in km/h.
pub const DRIVING_SPEED_KMH: f64 = 40.0;
/// Durchschnittsgeschwindigkeit zu Fuß in km/h.
pub const WALKING_SPEED_KMH: f64 = 5.0;
/// Durchschnittsgeschwindigkeit ÖPNV in km/h.
pub const TRANSIT_SPEED_KMH: f64 = 25.0;

/// Umgebungsvariable, die den Directions-API-Schlüssel überschreibt.
pub const DIRECTIONS_KEY_ENV: &str = "MAP_MARKERS_DIRECTIONS_KEY";

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `map_markers.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    // ── Routing ─────────────────────────────────────────────────
    /// API-Schlüssel des Directions-Dienstes (ohne Schlüssel scheitert jede Routenberechnung)
    #[serde(default)]
    pub directions_api_key: Option<String>,
    /// Sprache für Directions-Antworten
    #[serde(default = "default_language")]
    pub language: String,

    // ── Marker ──────────────────────────────────────────────────
    /// Vorausgewählte Kategorie für neue Marker
    #[serde(default)]
    pub default_category: MarkerCategory,
    /// Adress-Platzhalter
    #[serde(default = "default_address_placeholder")]
    pub address_placeholder: String,

    // ── Karte ───────────────────────────────────────────────────
    /// Breiten-Ausdehnung beim ersten Zentrieren
    #[serde(default = "default_initial_latitude_delta")]
    pub initial_latitude_delta: f64,
    /// Längen-Ausdehnung beim ersten Zentrieren
    #[serde(default = "default_initial_longitude_delta")]
    pub initial_longitude_delta: f64,
    /// Relativer Rand beim Einpassen der Route
    #[serde(default = "default_route_edge_padding")]
    pub route_edge_padding: f64,

    // ── Geschätzte Routen ───────────────────────────────────────
    #[serde(default = "default_driving_speed_kmh")]
    pub driving_speed_kmh: f64,
    #[serde(default = "default_walking_speed_kmh")]
    pub walking_speed_kmh: f64,
    #[serde(default = "default_transit_speed_kmh")]
    pub transit_speed_kmh: f64,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            directions_api_key: None,
            language: default_language(),
            default_category: MarkerCategory::Favorite,
            address_placeholder: ADDRESS_PLACEHOLDER.to_string(),
            initial_latitude_delta: INITIAL_LATITUDE_DELTA,
            initial_longitude_delta: INITIAL_LONGITUDE_DELTA,
            route_edge_padding: ROUTE_EDGE_PADDING,
            driving_speed_kmh: DRIVING_SPEED_KMH,
            walking_speed_kmh: WALKING_SPEED_KMH,
            transit_speed_kmh: TRANSIT_SPEED_KMH,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_address_placeholder() -> String {
    ADDRESS_PLACEHOLDER.to_string()
}

fn default_initial_latitude_delta() -> f64 {
    INITIAL_LATITUDE_DELTA
}

fn default_initial_longitude_delta() -> f64 {
    INITIAL_LONGITUDE_DELTA
}

fn default_route_edge_padding() -> f64 {
    ROUTE_EDGE_PADDING
}

fn default_driving_speed_kmh() -> f64 {
    DRIVING_SPEED_KMH
}

fn default_walking_speed_kmh() -> f64 {
    WALKING_SPEED_KMH
}

fn default_transit_speed_kmh() -> f64 {
    TRANSIT_SPEED_KMH
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map-markers"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_markers.toml")
    }

    /// Übernimmt einen API-Schlüssel aus der Umgebung, falls gesetzt.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(DIRECTIONS_KEY_ENV) {
            if !key.trim().is_empty() {
                log::info!("Directions-API-Schlüssel aus {} übernommen", DIRECTIONS_KEY_ENV);
                self.directions_api_key = Some(key);
            }
        }
    }

    /// Gibt den API-Schlüssel zurück, sofern er nicht leer ist.
    pub fn api_key(&self) -> Option<&str> {
        self.directions_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Durchschnittsgeschwindigkeit für einen Modus (geschätzte Routen).
    pub fn speed_kmh(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Driving => self.driving_speed_kmh,
            TravelMode::Walking => self.walking_speed_kmh,
            TravelMode::Transit => self.transit_speed_kmh,
        }
    }
}
