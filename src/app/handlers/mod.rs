//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion; Fehler der
//! Use-Cases werden hier in Hinweise übersetzt.

pub mod dialog;
pub mod location;
pub mod markers;
pub mod routing;
