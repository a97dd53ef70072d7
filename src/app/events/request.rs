use crate::core::RouteRequest;
use crate::shared::SharePayload;

/// Aufträge an externe Kollaborateure.
///
/// Handler blockieren nie: sie reihen Aufträge im `AppState` ein, der Host
/// arbeitet sie ab und meldet das Ergebnis als `AppIntent` zurück.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    /// Standort-Berechtigung anfragen → `LocationPermissionResolved`
    RequestPermission,
    /// Aktuellen Standort ermitteln → `LocationReceived` / `LocationFailed`
    FetchLocation,
    /// Standort + Adresse für einen neuen Marker ermitteln
    /// → `MarkerPlacementResolved` / `MarkerPlacementFailed`
    ResolvePlacement,
    /// Route berechnen → `RouteComputed` / `RouteFailed`
    ComputeRoute(RouteRequest),
    /// Über das Betriebssystem teilen (Fehler werden nur geloggt)
    Share(SharePayload),
}
