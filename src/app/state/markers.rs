//! Geordnete Marker-Sammlung (Einfügereihenfolge = Anzeige-/Entfernreihenfolge).

use crate::core::{Coordinate, Marker, MarkerCategory, MarkerId};
use indexmap::IndexMap;

/// Besitzt alle platzierten Marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    markers: IndexMap<MarkerId, Marker>,
    /// Zuletzt vergebene ID (auch nach Entfernen, damit IDs nie wiederverwendet werden)
    last_issued: Option<MarkerId>,
}

impl MarkerStore {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Marker und hängt ihn an.
    pub fn insert(
        &mut self,
        coordinate: Coordinate,
        category: MarkerCategory,
        address: String,
        created_at_ms: i64,
    ) -> MarkerId {
        let id = MarkerId::from_timestamp(created_at_ms, self.last_issued);
        self.last_issued = Some(id);
        self.markers.insert(
            id,
            Marker::new(id, coordinate, category, address, created_at_ms),
        );
        id
    }

    /// Entfernt einen Marker unter Erhalt der Reihenfolge der übrigen.
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        self.markers.shift_remove(&id)
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    /// Zuletzt eingefügter, noch vorhandener Marker.
    pub fn last(&self) -> Option<&Marker> {
        self.markers.last().map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Kopie aller Marker für die Anzeige.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.markers.values().cloned().collect()
    }
}
