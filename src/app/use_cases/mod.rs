//! Use-Cases: fachliche Zustandsübergänge auf dem AppState.
//!
//! Use-Cases liefern `AppError` zurück; die Übersetzung in Hinweise
//! übernehmen die Handler.

pub mod location;
pub mod markers;
pub mod routing;
pub mod share;
