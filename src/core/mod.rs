//! Core-Domänentypen: Koordinaten, Marker, Routen, Kartenausschnitt, Fehler.

pub mod coord;
pub mod error;
pub mod marker;
pub mod region;
pub mod route;

pub use coord::Coordinate;
pub use error::AppError;
pub use marker::{AddressComponents, Marker, MarkerCategory, MarkerId};
pub use region::MapRegion;
pub use route::{RouteRequest, RouteResult, TravelMode};
