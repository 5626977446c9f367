use approx::assert_relative_eq;
use glam::DVec2;
use zirkel_editor::{AppCommand, AppController, AppIntent, AppState, ToolKind, ToolPrimitive};

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_two_clicks_commit_a_segment_and_recompute() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(0.0, 0.0),
            },
        )
        .expect("Erster Klick sollte ohne Fehler durchlaufen");
    assert_eq!(state.sketch.segment_count(), 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(40.0, 0.0),
            },
        )
        .expect("Zweiter Klick sollte ohne Fehler durchlaufen");

    assert_eq!(state.sketch.segment_count(), 1);
    assert_eq!(state.sketch.segments()[0].start, DVec2::new(0.0, 0.0));
    assert_eq!(state.sketch.segments()[0].end, DVec2::new(40.0, 0.0));
    // Schwebezustand geleert, bereit für die nächste Platzierung
    assert!(state.tool.preview().is_none());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::PlacePoint { .. } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_crossing_segments_produce_intersection_after_commit() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for click in [
        DVec2::new(0.0, 0.0),
        DVec2::new(40.0, 40.0),
        DVec2::new(0.0, 40.0),
        DVec2::new(40.0, 0.0),
    ] {
        controller
            .handle_intent(&mut state, AppIntent::PrimaryClicked { world_pos: click })
            .expect("Klick sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.sketch.segment_count(), 2);
    assert_eq!(state.sketch.intersection_count(), 1);
    assert_relative_eq!(state.sketch.intersections()[0].x, 20.0);
    assert_relative_eq!(state.sketch.intersections()[0].y, 20.0);
}

#[test]
fn test_pointer_near_intersection_shows_snap_indicator() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.sketch.add_segment(DVec2::new(0.0, 0.0), DVec2::new(40.0, 40.0));
    state.sketch.add_segment(DVec2::new(0.0, 40.0), DVec2::new(40.0, 0.0));
    state.sketch.recompute_intersections();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: DVec2::new(21.0, 19.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert!(state.pointer.target.is_snap());
    assert_eq!(state.pointer.target.position(), DVec2::new(20.0, 20.0));

    let scene = controller.build_scene(&state);
    assert_eq!(scene.snap_indicator, Some(DVec2::new(20.0, 20.0)));
}

#[test]
fn test_snap_priority_prefers_intersection_over_closer_endpoint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    // Schnittpunkt bei (5, 5), Endpunkt bei (5, 6)
    state.sketch.add_segment(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
    state.sketch.add_segment(DVec2::new(0.0, 10.0), DVec2::new(10.0, 0.0));
    state.sketch.add_segment(DVec2::new(5.0, 6.0), DVec2::new(5.0, 30.0));
    state.sketch.recompute_intersections();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: DVec2::new(5.0, 5.5),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    // Beide in Reichweite — der Schnittpunkt gewinnt, nie der Endpunkt
    assert_eq!(state.pointer.target.position(), DVec2::new(5.0, 5.0));
}

#[test]
fn test_click_snaps_placement_onto_existing_endpoint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.sketch.add_segment(DVec2::new(0.0, 0.0), DVec2::new(40.0, 0.0));
    state.sketch.recompute_intersections();

    // Klick knapp neben dem Endpunkt (40, 0) rastet ein
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(42.0, 3.0),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");

    match state.tool.preview() {
        Some(ToolPrimitive::Segment(segment)) => {
            assert_eq!(segment.start, DVec2::new(40.0, 0.0));
        }
        other => panic!("Segment-Vorschau erwartet, war {other:?}"),
    }
}

#[test]
fn test_compass_two_clicks_commit_circle_with_cursor_radius() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                kind: ToolKind::Compass,
            },
        )
        .expect("ToolSelected sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(100.0, 100.0),
            },
        )
        .expect("Erster Klick sollte ohne Fehler durchlaufen");

    // Mausbewegung zieht den Radius in der Vorschau nach
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: DVec2::new(130.0, 100.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    match state.tool.preview() {
        Some(ToolPrimitive::Circle(circle)) => assert_relative_eq!(circle.radius, 30.0),
        other => panic!("Kreis-Vorschau erwartet, war {other:?}"),
    }

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(103.0, 104.0),
            },
        )
        .expect("Zweiter Klick sollte ohne Fehler durchlaufen");

    assert_eq!(state.sketch.circle_count(), 1);
    assert_eq!(state.sketch.circles()[0].center, DVec2::new(100.0, 100.0));
    assert_relative_eq!(state.sketch.circles()[0].radius, 5.0);
}

#[test]
fn test_tool_switch_abandons_pending_placement() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Platzierung beginnen, dann Zirkel und wieder Lineal wählen
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(0.0, 0.0),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
    assert!(state.tool.preview().is_some());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                kind: ToolKind::Compass,
            },
        )
        .expect("ToolSelected sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                kind: ToolKind::Straightedge,
            },
        )
        .expect("ToolSelected sollte ohne Fehler durchlaufen");

    // Kein halbfertiges Segment aus der früheren Platzierung
    assert!(state.tool.preview().is_none());

    // Die nächsten zwei Klicks bauen ein frisches Segment
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(100.0, 0.0),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(100.0, 50.0),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");

    assert_eq!(state.sketch.segment_count(), 1);
    assert_eq!(state.sketch.segments()[0].start, DVec2::new(100.0, 0.0));
    assert_eq!(state.sketch.segments()[0].end, DVec2::new(100.0, 50.0));
}

#[test]
fn test_reselecting_active_tool_keeps_pending_placement() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryClicked {
                world_pos: DVec2::new(0.0, 0.0),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToolSelected {
                kind: ToolKind::Straightedge,
            },
        )
        .expect("ToolSelected sollte ohne Fehler durchlaufen");

    // Identität unverändert — Schwebezustand bleibt erhalten
    assert!(state.tool.preview().is_some());
}

#[test]
fn test_scene_snapshot_reflects_committed_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for click in [
        DVec2::new(0.0, 0.0),
        DVec2::new(40.0, 40.0),
        DVec2::new(0.0, 40.0),
        DVec2::new(40.0, 0.0),
    ] {
        controller
            .handle_intent(&mut state, AppIntent::PrimaryClicked { world_pos: click })
            .expect("Klick sollte ohne Fehler durchlaufen");
    }

    let scene = controller.build_scene(&state);

    assert!(scene.has_content());
    assert_eq!(scene.segments.len(), 2);
    assert_eq!(scene.intersections.len(), 1);
    assert!(scene.preview.is_none());
    assert_eq!(scene.status_text, state.tool.status_text());
}
