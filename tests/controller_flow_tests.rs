use bicycle_parking_map::api::AddPointOutcome;
use bicycle_parking_map::app::state::Severity;
use bicycle_parking_map::{
    AppCommand, AppController, AppIntent, AppState, FeatureCollection, LngLat, PopupAnchor, Tab,
};
use serde_json::json;

fn sample_feature(json_id: &str, title: Option<&str>) -> bicycle_parking_map::Feature {
    let properties = match title {
        Some(t) => json!({ "title": t }),
        None => json!({}),
    };
    let text = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": serde_json::from_str::<serde_json::Value>(json_id).expect("gültige ID"),
            "geometry": { "type": "Point", "coordinates": [24.94, 60.17] },
            "properties": properties,
        }]
    })
    .to_string();
    FeatureCollection::from_json(&text)
        .expect("gültiges GeoJSON")
        .features
        .remove(0)
}

fn open_popup(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::AddPointPopupRequested {
                lng_lat: LngLat::new(24.93, 60.17),
                anchor: PopupAnchor::TopLeft,
            },
        )
        .expect("Popup sollte sich öffnen");
}

#[test]
fn test_context_menu_opens_seeded_popup_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    open_popup(&mut controller, &mut state);

    let popup = state
        .popups
        .add_point
        .as_ref()
        .expect("Popup sollte offen sein");
    assert_eq!(popup.anchor, PopupAnchor::TopLeft);
    assert_eq!(popup.fields.lng, "24.93");
    assert_eq!(popup.fields.lat, "60.17");

    match state.command_log.entries().last() {
        Some(AppCommand::OpenAddPointPopup { anchor, .. }) => {
            assert_eq!(*anchor, PopupAnchor::TopLeft)
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_longitude_out_of_range_is_rejected_without_mutation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    open_popup(&mut controller, &mut state);

    if let Some(popup) = state.popups.add_point.as_mut() {
        popup.fields.title = "Kamppi".to_string();
        popup.fields.lng = "200".to_string();
    }

    controller
        .handle_intent(&mut state, AppIntent::AddPointSubmitted)
        .expect("Submit sollte ohne Fehler durchlaufen");

    let popup = state
        .popups
        .add_point
        .as_ref()
        .expect("Popup sollte offen bleiben");
    assert_eq!(
        popup.errors.lng,
        Some("number between -180 to 180 required")
    );
    assert!(!popup.is_submitting());
    assert!(state.submissions.outbox.is_empty());
}

#[test]
fn test_submit_twice_queues_one_mutation_and_success_closes_popup() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    open_popup(&mut controller, &mut state);

    if let Some(popup) = state.popups.add_point.as_mut() {
        popup.fields.title = "Kamppi".to_string();
        popup.fields.category = "u-rack".to_string();
    }

    for _ in 0..2 {
        controller
            .handle_intent(&mut state, AppIntent::AddPointSubmitted)
            .expect("Submit sollte ohne Fehler durchlaufen");
    }

    let outbox = state.submissions.take_outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].point.category, "u-rack");

    controller
        .handle_intent(
            &mut state,
            AppIntent::AddPointCompleted {
                request_id: outbox[0].request_id,
                outcome: AddPointOutcome::Saved {
                    result: json!({ "id": "p-1" }),
                },
            },
        )
        .expect("Antwort sollte verarbeitet werden");

    assert!(state.popups.add_point.is_none());
    assert_eq!(state.notifications.entries()[0].message, "Kamppi added");
    assert_eq!(
        state.notifications.entries()[0].severity,
        Severity::Success
    );
    assert_eq!(state.pending_source_features.len(), 1);
    assert_eq!(state.pending_source_features[0].id, "p-1");
    assert!(!state.submissions.has_pending());
}

#[test]
fn test_failed_mutation_keeps_popup_and_notifies() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    open_popup(&mut controller, &mut state);
    if let Some(popup) = state.popups.add_point.as_mut() {
        popup.fields.title = "Kamppi".to_string();
    }
    controller
        .handle_intent(&mut state, AppIntent::AddPointSubmitted)
        .expect("Submit sollte ohne Fehler durchlaufen");
    let request_id = state.submissions.take_outbox()[0].request_id;

    controller
        .handle_intent(
            &mut state,
            AppIntent::AddPointCompleted {
                request_id,
                outcome: AddPointOutcome::Failed {
                    message: "Backend nicht erreichbar".to_string(),
                },
            },
        )
        .expect("Fehler sollte verarbeitet werden");

    let popup = state
        .popups
        .add_point
        .as_ref()
        .expect("Popup sollte offen bleiben");
    assert!(!popup.is_submitting());
    assert_eq!(state.notifications.entries()[0].severity, Severity::Error);
    assert!(state.pending_source_features.is_empty());
}

#[test]
fn test_more_action_selects_feature_closes_popup_and_switches_tab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let feature = sample_feature("12", None);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FeaturePopupRequested {
                feature: feature.clone(),
            },
        )
        .expect("Detail-Popup sollte sich öffnen");
    assert_eq!(
        state.popups.feature.as_ref().map(|p| p.feature.label()),
        Some("id: 12".to_string())
    );

    controller
        .handle_intent(&mut state, AppIntent::FeatureDetailsRequested)
        .expect("more sollte ohne Fehler durchlaufen");

    assert!(state.popups.feature.is_none());
    assert_eq!(state.view.active_tab, Tab::Point);
    let selected: Vec<&str> = state.selection.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(selected, vec!["12"]);
}

#[test]
fn test_more_without_popup_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::FeatureDetailsRequested)
        .expect("more ohne Popup sollte ignoriert werden");

    assert!(state.selection.is_empty());
    assert_eq!(state.view.active_tab, Tab::Map);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_expired_notification_is_removed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state.notifications.push(Severity::Info, "hallo");

    controller
        .handle_intent(&mut state, AppIntent::NotificationExpired { id })
        .expect("Ablauf sollte verarbeitet werden");

    assert!(state.notifications.is_empty());
}
