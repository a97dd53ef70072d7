//! Vom Nutzer platzierte, kategorisierte Karten-Marker.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Zeitbasierte, eindeutige Marker-ID (Erstellungszeitpunkt in ms, streng steigend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

impl MarkerId {
    /// Leitet eine neue ID aus dem Erstellungszeitpunkt ab.
    ///
    /// Kollidiert der Zeitstempel mit der zuletzt vergebenen ID (gleiche
    /// Millisekunde oder rückwärts gestellte Uhr), wird `last + 1` vergeben.
    pub fn from_timestamp(created_at_ms: i64, last: Option<MarkerId>) -> Self {
        let candidate = u64::try_from(created_at_ms).unwrap_or(0);
        match last {
            Some(MarkerId(prev)) if candidate <= prev => MarkerId(prev + 1),
            _ => MarkerId(candidate),
        }
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker-Kategorie (bei Erstellung festgelegt, danach unveränderlich)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerCategory {
    /// Aktueller Standort
    Current,
    /// Lieblingsort
    #[default]
    Favorite,
    /// Restaurant
    Restaurant,
    /// Foto-Spot
    Photo,
    /// Benutzerdefiniert
    Custom,
}

impl MarkerCategory {
    /// Alle Kategorien in Anzeige-Reihenfolge (Kategorie-Auswahl).
    pub const ALL: [MarkerCategory; 5] = [
        MarkerCategory::Current,
        MarkerCategory::Favorite,
        MarkerCategory::Restaurant,
        MarkerCategory::Photo,
        MarkerCategory::Custom,
    ];

    /// Titel neuer Marker dieser Kategorie.
    pub fn title(self) -> &'static str {
        match self {
            MarkerCategory::Current => "Current Location",
            MarkerCategory::Favorite => "Favorite Place",
            MarkerCategory::Restaurant => "Restaurant",
            MarkerCategory::Photo => "Photo Spot",
            MarkerCategory::Custom => "Custom Marker",
        }
    }

    /// Pin-Farbe (RGBA).
    pub fn color(self) -> [f32; 4] {
        match self {
            MarkerCategory::Current => [0.0, 0.48, 1.0, 1.0],
            MarkerCategory::Favorite => [1.0, 0.23, 0.19, 1.0],
            MarkerCategory::Restaurant => [1.0, 0.58, 0.0, 1.0],
            MarkerCategory::Photo => [0.69, 0.32, 0.87, 1.0],
            MarkerCategory::Custom => [0.2, 0.78, 0.35, 1.0],
        }
    }

    /// Icon-Name für Kategorie-Auswahl und Pin.
    pub fn icon(self) -> &'static str {
        match self {
            MarkerCategory::Current => "my-location",
            MarkerCategory::Favorite => "star",
            MarkerCategory::Restaurant => "restaurant",
            MarkerCategory::Photo => "camera",
            MarkerCategory::Custom => "place",
        }
    }
}

/// Adressbestandteile aus dem Rückwärts-Geocoding (alle optional).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressComponents {
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl AddressComponents {
    /// Formatiert die Adresse als eine Zeile; `None` wenn alle Teile leer sind.
    pub fn format(&self) -> Option<String> {
        let street = self.street.as_deref().or(self.name.as_deref());
        let parts: Vec<&str> = [
            street,
            self.city.as_deref(),
            self.region.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Ein platzierter Marker. Nach der Erstellung unveränderlich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub coordinate: Coordinate,
    pub category: MarkerCategory,
    /// Aus der Kategorie abgeleiteter Titel
    pub title: String,
    /// Freitext (Erstellungszeitpunkt)
    pub description: String,
    /// Aufgelöste Adresse oder Platzhalter
    pub address: String,
    /// Erstellungszeitpunkt (Unix-Epoche, ms)
    pub created_at_ms: i64,
}

impl Marker {
    /// Erstellt einen Marker; Titel und Beschreibung werden abgeleitet.
    pub fn new(
        id: MarkerId,
        coordinate: Coordinate,
        category: MarkerCategory,
        address: String,
        created_at_ms: i64,
    ) -> Self {
        Self {
            id,
            coordinate,
            category,
            title: category.title().to_string(),
            description: describe_creation(created_at_ms),
            address,
            created_at_ms,
        }
    }
}

fn describe_creation(created_at_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(created_at_ms) {
        Some(utc) => {
            let local = utc.with_timezone(&chrono::Local);
            format!("Added on {}", local.format("%Y-%m-%d %H:%M"))
        }
        None => format!("Added at {}", created_at_ms),
    }
}
