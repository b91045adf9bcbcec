use crate::app::state::{FeaturePopup, Tab};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Feature, FeatureCollection, LngLat, PopupAnchor};

use super::map_intent_to_commands;

fn sample_feature() -> Feature {
    FeatureCollection::from_json(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","id":3,"geometry":{"type":"Point","coordinates":[24.9,60.1]},
             "properties":{"title":"Rautatientori"}}]}"#,
    )
    .expect("gültiges GeoJSON")
    .features
    .remove(0)
}

#[test]
fn context_menu_intent_maps_to_open_popup() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddPointPopupRequested {
            lng_lat: LngLat::new(24.9, 60.1),
            anchor: PopupAnchor::TopRight,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::OpenAddPointPopup {
            anchor: PopupAnchor::TopRight,
            ..
        }
    ));
}

#[test]
fn feature_details_maps_to_select_close_and_tab_switch_in_order() {
    let mut state = AppState::new();
    state.popups.feature = Some(FeaturePopup {
        id: 1,
        feature: sample_feature(),
    });

    let commands = map_intent_to_commands(&state, AppIntent::FeatureDetailsRequested);

    assert_eq!(commands.len(), 3);
    match &commands[0] {
        AppCommand::SelectFeatures { features } => assert_eq!(features[0].id, "3"),
        other => panic!("Unerwarteter Command: {other:?}"),
    }
    assert!(matches!(commands[1], AppCommand::CloseFeaturePopup));
    assert!(matches!(
        commands[2],
        AppCommand::SetActiveTab { tab: Tab::Point }
    ));
}

#[test]
fn feature_details_without_popup_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FeatureDetailsRequested);

    assert!(commands.is_empty());
}

#[test]
fn empty_map_click_closes_only_open_popups() {
    let mut state = AppState::new();

    assert!(map_intent_to_commands(&state, AppIntent::EmptyMapClicked).is_empty());

    state.popups.feature = Some(FeaturePopup {
        id: 1,
        feature: sample_feature(),
    });
    let commands = map_intent_to_commands(&state, AppIntent::EmptyMapClicked);

    assert!(matches!(commands[..], [AppCommand::CloseFeaturePopup]));
}

#[test]
fn expired_and_dismissed_notifications_share_command() {
    let state = AppState::new();

    for intent in [
        AppIntent::NotificationDismissed { id: 4 },
        AppIntent::NotificationExpired { id: 4 },
    ] {
        let commands = map_intent_to_commands(&state, intent);
        assert!(matches!(
            commands[..],
            [AppCommand::DismissNotification { id: 4 }]
        ));
    }
}
