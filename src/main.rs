//! Map Markers (Headless-Host).
//!
//! Spielt eine kurze Sitzung gegen feste Kollaborateure ab: Standort holen,
//! Marker setzen, Route zum letzten Marker berechnen. Routen werden offline
//! geschätzt, da die HTTP-Anbindung Sache des jeweiligen Hosts ist.

use map_markers::bridge::{EstimatedDirections, FixedLocation, LogShareSink, NoGeocoder};
use map_markers::{
    AppController, AppIntent, AppOptions, AppState, Coordinate, HostBridge, MarkerCategory,
    ViewScene,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

type Bridge = HostBridge<FixedLocation, NoGeocoder, EstimatedDirections, LogShareSink>;

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Markers v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let mut options = AppOptions::load_from_file(&config_path);
        options.apply_env_overrides();

        let start = Coordinate::new(37.0, -122.0)?;
        let mut bridge = HostBridge::new(
            FixedLocation::at(start),
            NoGeocoder,
            EstimatedDirections::from_options(&options),
            LogShareSink,
        );
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        if let Err(e) = Self::session(&mut controller, &mut state, &mut bridge) {
            log::error!("Sitzung abgebrochen: {:#}", e);
            return Err(e);
        }

        Self::log_scene(&controller.build_view_scene(&state));
        log::info!("{} Commands ausgeführt", state.command_log.len());
        Ok(())
    }

    fn session(
        controller: &mut AppController,
        state: &mut AppState,
        bridge: &mut Bridge,
    ) -> anyhow::Result<()> {
        Self::step(controller, state, bridge, AppIntent::AppStarted)?;
        Self::step(controller, state, bridge, AppIntent::AddMarkerRequested)?;
        Self::step(
            controller,
            state,
            bridge,
            AppIntent::CategorySelected {
                category: MarkerCategory::Restaurant,
            },
        )?;

        // Zweiter Marker etwas nordöstlich vom Start
        bridge.location.position = Some(Coordinate::new(37.04, -121.96)?);
        Self::step(controller, state, bridge, AppIntent::AddMarkerRequested)?;

        // Route vom aktuellen Standort zurück zum ersten Marker
        let Some(target) = state.markers.iter().next().map(|m| m.id) else {
            anyhow::bail!("Kein Marker für die Routenberechnung vorhanden");
        };
        Self::step(
            controller,
            state,
            bridge,
            AppIntent::ShareMarkerRequested { marker_id: target },
        )?;
        Self::step(controller, state, bridge, AppIntent::StartRoutingRequested)?;
        Self::step(
            controller,
            state,
            bridge,
            AppIntent::MarkerTapped { marker_id: target },
        )
    }

    /// Verarbeitet einen Intent und bedient danach alle entstandenen Host-Aufträge.
    fn step(
        controller: &mut AppController,
        state: &mut AppState,
        bridge: &mut Bridge,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        controller.handle_intent(state, intent)?;
        let served = bridge.run_until_idle(controller, state)?;
        log::debug!("{} Host-Aufträge bedient", served);
        Ok(())
    }

    fn log_scene(scene: &ViewScene) {
        log::info!("{} Marker auf der Karte", scene.markers.len());
        for marker in &scene.markers {
            log::info!(
                "  {} {} ({}): {}",
                marker.category.icon(),
                marker.title,
                marker.coordinate,
                marker.address
            );
        }
        if let Some(summary) = &scene.route_summary {
            log::info!(
                "Route ({}): {}, {}",
                summary.travel_mode.label(),
                summary.distance,
                summary.duration
            );
        }
        if let Some(notice) = &scene.notice {
            log::warn!("Hinweis: {}", notice);
        }
    }
}
