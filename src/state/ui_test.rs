use super::*;

#[test]
fn ui_state_default_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(state.theme.is_light());
}

#[test]
fn theme_from_media_query_match() {
    assert_eq!(Theme::from_prefers_light(true), Theme::Light);
    assert_eq!(Theme::from_prefers_light(false), Theme::Dark);
    assert!(!Theme::Dark.is_light());
}
