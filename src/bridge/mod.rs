//! Host-Bridge: Anbindung der externen Kollaborateure.
//!
//! Der Host arbeitet die im `AppState` eingereihten `HostRequest`s ab und
//! speist die Ergebnisse als `AppIntent`s wieder in den Controller ein.

pub mod directions;
mod host;
pub mod providers;

pub use directions::{EstimatedDirections, GoogleDirections};
pub use host::HostBridge;
pub use providers::{
    DirectionsProvider, DirectionsTransport, FixedLocation, Geocoder, LocationProvider,
    LogShareSink, NoGeocoder, ShareSink,
};
