//! Use-Case: Marker über das Betriebssystem teilen.

use crate::app::{AppState, HostRequest};
use crate::core::MarkerId;
use crate::shared::SharePayload;

/// Übergibt die Teilen-Nutzlast eines Markers an den Host.
pub fn share_marker(state: &mut AppState, marker_id: MarkerId) {
    let Some(marker) = state.markers.get(marker_id) else {
        log::debug!("Marker {} nicht vorhanden, nichts zu teilen", marker_id);
        return;
    };
    let payload = SharePayload::for_marker(marker);
    state.push_host_request(HostRequest::Share(payload));
}
