use approx::assert_relative_eq;
use map_markers::{
    AppCommand, AppController, AppError, AppIntent, AppState, Coordinate, HostRequest,
    MarkerCategory, MarkerId, PermissionStatus, RoutePhase, RouteRequest, RouteResult,
    TravelMode,
};

fn coord(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).expect("gültige Testkoordinate")
}

/// Zustand mit erlaubtem Standortzugriff und bekanntem Standort (37, -122).
fn located_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationPermissionResolved { granted: true },
        )
        .expect("Berechtigung sollte übernommen werden");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationReceived {
                coordinate: coord(37.0, -122.0),
            },
        )
        .expect("Standort sollte übernommen werden");
    state.take_host_requests();
    state
}

fn place_marker(
    controller: &mut AppController,
    state: &mut AppState,
    coordinate: Coordinate,
    timestamp_ms: i64,
) -> MarkerId {
    controller
        .handle_intent(
            state,
            AppIntent::MarkerPlacementResolved {
                coordinate,
                address: Some("1 Main St, Springfield".into()),
                timestamp_ms,
            },
        )
        .expect("Marker-Platzierung sollte funktionieren");
    state.markers.last().expect("Marker erwartet").id
}

fn route_for(request: RouteRequest, distance_km: f64, duration_minutes: f64) -> RouteResult {
    RouteResult {
        request,
        distance_km,
        duration_minutes,
        polyline: vec![request.origin, request.destination],
    }
}

fn last_compute_request(state: &AppState) -> RouteRequest {
    state
        .pending_host_requests()
        .iter()
        .rev()
        .find_map(|r| match r {
            HostRequest::ComputeRoute(request) => Some(*request),
            _ => None,
        })
        .expect("Es sollte eine Routen-Anfrage eingereiht sein")
}

#[test]
fn test_app_started_requests_permission_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AppStarted)
        .expect("AppStarted sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.pending_host_requests(),
        &[HostRequest::RequestPermission]
    );
    match state.command_log.last() {
        Some(AppCommand::RequestLocationPermission) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_granted_permission_fetches_location_and_centers_map() {
    let mut controller = AppController::new();
    let state = located_state(&mut controller);

    assert_eq!(state.location.permission, PermissionStatus::Granted);
    assert_eq!(state.location.current, Some(coord(37.0, -122.0)));
    let region = state.view.region.expect("Region erwartet");
    assert_relative_eq!(region.center.latitude, 37.0);
    assert_relative_eq!(region.latitude_delta, state.options.initial_latitude_delta);
}

#[test]
fn test_denied_permission_shows_notice_and_blocks_placement() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationPermissionResolved { granted: false },
        )
        .unwrap();
    assert_eq!(state.ui.notice, Some(AppError::PermissionDenied));

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    assert!(state.pending_host_requests().is_empty());
    assert!(!controller.build_view_scene(&state).can_add_marker);
}

#[test]
fn test_add_marker_appends_in_insertion_order_with_selected_category() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);

    let first = place_marker(&mut controller, &mut state, coord(37.0, -122.0), 1_000);
    controller
        .handle_intent(
            &mut state,
            AppIntent::CategorySelected {
                category: MarkerCategory::Restaurant,
            },
        )
        .unwrap();
    let second = place_marker(&mut controller, &mut state, coord(37.1, -122.1), 1_000);

    assert_eq!(state.marker_count(), 2);
    assert!(first < second, "IDs müssen streng steigend sein");
    let ids: Vec<_> = state.markers.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first, second]);

    // Kategoriewechsel ändert bestehende Marker nicht
    assert_eq!(
        state.markers.get(first).unwrap().category,
        MarkerCategory::Favorite
    );
    assert_eq!(
        state.markers.get(second).unwrap().category,
        MarkerCategory::Restaurant
    );
    assert_eq!(state.markers.get(second).unwrap().title, "Restaurant");
}

#[test]
fn test_placement_without_address_uses_placeholder() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerPlacementResolved {
                coordinate: coord(37.0, -122.0),
                address: None,
                timestamp_ms: 5,
            },
        )
        .unwrap();

    let marker = state.markers.last().unwrap();
    assert_eq!(marker.address, state.options.address_placeholder);
    assert!(state.ui.notice.is_none(), "Geocoding-Fehler bleibt still");
}

#[test]
fn test_remove_last_on_empty_store_reports_notice() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::RemoveLastMarkerRequested)
        .unwrap();

    assert_eq!(state.ui.notice, Some(AppError::NoMarkersToRemove));
    assert!(state.ui.pending_removal.is_none());
    assert_eq!(state.marker_count(), 0);

    controller
        .handle_intent(&mut state, AppIntent::NoticeDismissed)
        .unwrap();
    assert!(state.ui.notice.is_none());
}

#[test]
fn test_remove_last_requires_confirmation() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let first = place_marker(&mut controller, &mut state, coord(37.0, -122.0), 10);
    let second = place_marker(&mut controller, &mut state, coord(37.1, -122.1), 20);

    controller
        .handle_intent(&mut state, AppIntent::RemoveLastMarkerRequested)
        .unwrap();
    assert_eq!(state.marker_count(), 2, "Erst nach Bestätigung entfernen");
    let prompt = controller
        .build_view_scene(&state)
        .removal_prompt
        .expect("Bestätigungsdialog erwartet");
    assert_eq!(prompt.marker_id, second);

    controller
        .handle_intent(&mut state, AppIntent::RemoveLastMarkerConfirmed)
        .unwrap();

    assert_eq!(state.marker_count(), 1);
    assert!(state.markers.get(second).is_none());
    assert!(state.markers.get(first).is_some());
    assert!(controller.build_view_scene(&state).removal_prompt.is_none());
}

#[test]
fn test_remove_marker_twice_is_idempotent() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let id = place_marker(&mut controller, &mut state, coord(37.0, -122.0), 10);

    for _ in 0..2 {
        controller
            .handle_intent(&mut state, AppIntent::RemoveMarkerRequested { marker_id: id })
            .expect("Entfernen sollte nie fehlschlagen");
    }

    assert_eq!(state.marker_count(), 0);
    assert!(state.ui.notice.is_none());

    // Neue Marker bekommen nie die entfernte ID
    let next = place_marker(&mut controller, &mut state, coord(37.0, -122.0), 10);
    assert_ne!(next, id);
}

#[test]
fn test_marker_tap_inspects_when_routing_inactive() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let id = place_marker(&mut controller, &mut state, coord(37.1, -122.1), 10);

    controller
        .handle_intent(&mut state, AppIntent::MarkerTapped { marker_id: id })
        .unwrap();

    let scene = controller.build_view_scene(&state);
    assert_eq!(scene.inspected_marker.map(|m| m.id), Some(id));
    assert_eq!(state.route_phase(), RoutePhase::Idle);
}

#[test]
fn test_share_marker_queues_payload_with_map_link() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let id = place_marker(&mut controller, &mut state, coord(37.1, -122.1), 10);
    state.take_host_requests();

    controller
        .handle_intent(&mut state, AppIntent::ShareMarkerRequested { marker_id: id })
        .unwrap();

    match state.pending_host_requests() {
        [HostRequest::Share(payload)] => {
            assert_eq!(payload.title, "Favorite Place");
            assert!(payload.message.contains("Address: 1 Main St, Springfield"));
            assert!(payload.url.starts_with("https://maps.google.com/?q="));
        }
        other => panic!("Unerwartete Host-Aufträge: {other:?}"),
    }
}

#[test]
fn test_start_routing_without_location_stays_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::StartRoutingRequested)
        .unwrap();

    assert_eq!(state.route_phase(), RoutePhase::Idle);
    assert_eq!(
        state.ui.notice,
        Some(AppError::Precondition("location unavailable"))
    );
}

#[test]
fn test_routing_scenario_with_stale_result_after_mode_change() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let target = place_marker(&mut controller, &mut state, coord(37.03, -122.03), 10);
    // Platzierung setzt den Standort auf den Marker, daher zurück auf den Start
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationReceived {
                coordinate: coord(37.0, -122.0),
            },
        )
        .unwrap();
    state.take_host_requests();

    controller
        .handle_intent(&mut state, AppIntent::StartRoutingRequested)
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::Selecting);
    let scene = controller.build_view_scene(&state);
    assert!(!scene.callouts_enabled);
    assert!(!scene.shows_route_summary());

    controller
        .handle_intent(&mut state, AppIntent::MarkerTapped { marker_id: target })
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::AwaitingResult);
    assert!(controller.build_view_scene(&state).route_loading);

    let driving = last_compute_request(&state);
    assert_eq!(driving.origin, coord(37.0, -122.0));
    assert_eq!(driving.destination, coord(37.03, -122.03));
    assert_eq!(driving.travel_mode, TravelMode::Driving);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteComputed {
                result: route_for(driving, 5.0, 12.0),
            },
        )
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::Showing);
    let summary = controller
        .build_view_scene(&state)
        .route_summary
        .expect("Routen-Zusammenfassung erwartet");
    assert_eq!(summary.distance, "5.0 km");
    assert_eq!(summary.duration, "12 min");
    assert_eq!(summary.travel_mode, TravelMode::Driving);

    controller
        .handle_intent(
            &mut state,
            AppIntent::TravelModeSelected {
                mode: TravelMode::Walking,
            },
        )
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::AwaitingResult);
    assert!(!controller.build_view_scene(&state).shows_route_summary());
    let walking = last_compute_request(&state);
    assert_eq!(walking.travel_mode, TravelMode::Walking);

    // Verspätete Driving-Antwort wird verworfen
    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteComputed {
                result: route_for(driving, 5.0, 12.0),
            },
        )
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::AwaitingResult);
    assert!(state.routing.result().is_none());

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteComputed {
                result: route_for(walking, 4.2, 55.0),
            },
        )
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::Showing);
    let summary = controller.build_view_scene(&state).route_summary.unwrap();
    assert_eq!(summary.distance, "4.2 km");
    assert_eq!(summary.travel_mode, TravelMode::Walking);
}

#[test]
fn test_stale_failure_is_ignored_and_current_failure_keeps_routing_active() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let target = place_marker(&mut controller, &mut state, coord(37.1, -122.1), 10);

    controller
        .handle_intent(&mut state, AppIntent::StartRoutingRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::MarkerTapped { marker_id: target })
        .unwrap();
    let driving = last_compute_request(&state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::TravelModeSelected {
                mode: TravelMode::Transit,
            },
        )
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteFailed {
                request: driving,
                message: "ZERO_RESULTS".into(),
            },
        )
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::AwaitingResult);
    assert!(state.ui.notice.is_none());

    let transit = last_compute_request(&state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteFailed {
                request: transit,
                message: "ZERO_RESULTS".into(),
            },
        )
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::Selecting);
    assert_eq!(
        state.ui.notice,
        Some(AppError::RouteComputationFailed("ZERO_RESULTS".into()))
    );
}

#[test]
fn test_stop_routing_clears_route_and_discards_late_result() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    let target = place_marker(&mut controller, &mut state, coord(37.1, -122.1), 10);

    controller
        .handle_intent(&mut state, AppIntent::StartRoutingRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::MarkerTapped { marker_id: target })
        .unwrap();
    let request = last_compute_request(&state);

    controller
        .handle_intent(&mut state, AppIntent::StopRoutingRequested)
        .unwrap();
    assert_eq!(state.route_phase(), RoutePhase::Idle);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteComputed {
                result: route_for(request, 5.0, 12.0),
            },
        )
        .unwrap();

    assert_eq!(state.route_phase(), RoutePhase::Idle);
    let scene = controller.build_view_scene(&state);
    assert!(scene.route_overlay.is_none());
    assert!(!scene.shows_route_summary());
    assert!(scene.callouts_enabled);
}

#[test]
fn test_travel_mode_change_while_idle_is_ignored() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::TravelModeSelected {
                mode: TravelMode::Walking,
            },
        )
        .unwrap();

    assert_eq!(state.route_phase(), RoutePhase::Idle);
    assert!(state.pending_host_requests().is_empty());
}

/// Bringt die Routen-Sitzung in die gewünschte Phase.
fn drive_to_phase(controller: &mut AppController, state: &mut AppState, phase: RoutePhase) {
    if phase == RoutePhase::Idle {
        return;
    }
    let target = place_marker(controller, state, coord(37.1, -122.1), 10);
    controller
        .handle_intent(
            state,
            AppIntent::LocationReceived {
                coordinate: coord(37.0, -122.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(state, AppIntent::StartRoutingRequested)
        .unwrap();
    if phase == RoutePhase::Selecting {
        return;
    }
    controller
        .handle_intent(state, AppIntent::MarkerTapped { marker_id: target })
        .unwrap();
    if phase == RoutePhase::AwaitingResult {
        return;
    }
    let request = last_compute_request(state);
    controller
        .handle_intent(
            state,
            AppIntent::RouteComputed {
                result: route_for(request, 5.0, 12.0),
            },
        )
        .unwrap();
}

#[test]
fn test_stop_routing_twice_from_every_phase_ends_idle() {
    for phase in [
        RoutePhase::Idle,
        RoutePhase::Selecting,
        RoutePhase::AwaitingResult,
        RoutePhase::Showing,
    ] {
        let mut controller = AppController::new();
        let mut state = located_state(&mut controller);
        drive_to_phase(&mut controller, &mut state, phase);
        assert_eq!(state.route_phase(), phase);

        for _ in 0..2 {
            controller
                .handle_intent(&mut state, AppIntent::StopRoutingRequested)
                .expect("StopRoutingRequested sollte nie fehlschlagen");
            assert_eq!(state.route_phase(), RoutePhase::Idle, "aus {phase:?}");
        }

        let scene = controller.build_view_scene(&state);
        assert!(scene.route_overlay.is_none());
        assert!(scene.callouts_enabled);
        assert!(state.ui.notice.is_none());
    }
}

#[test]
fn test_successful_retry_replaces_failure_notice_with_summary() {
    let mut controller = AppController::new();
    let mut state = located_state(&mut controller);
    drive_to_phase(&mut controller, &mut state, RoutePhase::AwaitingResult);
    let driving = last_compute_request(&state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteFailed {
                request: driving,
                message: "ZERO_RESULTS".into(),
            },
        )
        .unwrap();
    let scene = controller.build_view_scene(&state);
    assert!(scene.notice.is_some());
    assert_eq!(scene.route_error.as_deref(), Some("ZERO_RESULTS"));

    controller
        .handle_intent(
            &mut state,
            AppIntent::TravelModeSelected {
                mode: TravelMode::Walking,
            },
        )
        .unwrap();
    let walking = last_compute_request(&state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteComputed {
                result: route_for(walking, 5.0, 60.0),
            },
        )
        .unwrap();

    let scene = controller.build_view_scene(&state);
    assert!(scene.shows_route_summary());
    assert!(scene.notice.is_none());
    assert!(scene.route_error.is_none());
}
