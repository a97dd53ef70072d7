//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der Anzeige bzw. dem Host geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod share;
mod view_scene;

pub use options::AppOptions;
pub use share::SharePayload;
pub use view_scene::{ControlPanel, RemovalPrompt, RouteOverlay, RouteSummaryView, ViewScene};
