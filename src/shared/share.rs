//! Text-Nutzlast für das Teilen eines Markers über das Betriebssystem.

use crate::core::Marker;

/// Geteilter Inhalt: Titel plus formatierter Text inklusive Karten-Link
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub message: String,
    pub url: String,
}

impl SharePayload {
    /// Baut die Nutzlast für einen Marker.
    pub fn for_marker(marker: &Marker) -> Self {
        let url = marker.coordinate.maps_link();
        let message = format!(
            "{}\n{}\nAddress: {}\n{}",
            marker.title, marker.description, marker.address, url
        );
        Self {
            title: marker.title.clone(),
            message,
            url,
        }
    }
}
