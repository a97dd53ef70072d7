//! Handler für Hinweise und den Bestätigungsdialog.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::AppError;

/// Zeigt einen nicht-fatalen Fehler als Hinweis an (Geocoding-Fehler bleiben still).
pub fn report_error(state: &mut AppState, error: AppError) {
    if error.is_user_visible() {
        log::info!("Hinweis: {}", error);
        state.ui.notice = Some(error);
    } else {
        log::warn!("{}", error);
    }
}

/// Schließt den aktuellen Hinweis.
pub fn dismiss_notice(state: &mut AppState) {
    state.ui.notice = None;
}

/// Öffnet die Bestätigung für "letzten Marker entfernen".
pub fn request_remove_last(state: &mut AppState) {
    if let Err(e) = use_cases::markers::request_remove_last(state) {
        report_error(state, e);
    }
}

/// Führt das bestätigte Entfernen aus.
pub fn confirm_remove_last(state: &mut AppState) {
    use_cases::markers::confirm_remove_last(state);
}

/// Schließt die Bestätigung ohne Änderung.
pub fn cancel_remove_last(state: &mut AppState) {
    use_cases::markers::cancel_remove_last(state);
}
