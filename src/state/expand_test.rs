use super::*;

#[test]
fn default_is_expanded_and_not_collapsible() {
    let state = ExpandState::default();
    assert!(state.is_expanded());
    assert!(!state.is_collapsible());
    assert!(state.content_visible());
}

#[test]
fn toggle_is_noop_when_not_collapsible() {
    let mut state = ExpandState::new(false, true);
    for _ in 0..3 {
        assert!(!state.toggle());
        assert!(state.content_visible());
    }
}

#[test]
fn non_collapsible_card_shows_content_even_when_default_collapsed() {
    let mut state = ExpandState::new(false, false);
    assert!(state.content_visible());
    state.toggle();
    assert!(state.content_visible());
}

#[test]
fn toggle_alternates_visibility_when_collapsible() {
    let mut state = ExpandState::new(true, true);
    let mut seen = Vec::new();
    for _ in 0..4 {
        assert!(state.toggle());
        seen.push(state.content_visible());
    }
    assert_eq!(seen, vec![false, true, false, true]);
}

#[test]
fn collapsible_card_can_start_collapsed() {
    let mut state = ExpandState::new(true, false);
    assert!(!state.content_visible());
    state.toggle();
    assert!(state.content_visible());
}

#[test]
fn indicator_rotates_only_while_expanded() {
    let mut state = ExpandState::new(true, true);
    assert!(state.indicator_class().ends_with("rotate-180"));
    state.toggle();
    assert!(!state.indicator_class().contains("rotate-180"));
}
