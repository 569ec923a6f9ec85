use super::*;

// =============================================================
// Precedence
// =============================================================

#[test]
fn every_flag_combination_selects_exactly_one_branch_by_precedence() {
    for is_loading in [false, true] {
        for is_empty in [false, true] {
            for error in [None, Some(""), Some("boom")] {
                let branch = select_branch(is_loading, is_empty, error);
                let expected = if is_loading {
                    DisplayBranch::Loading
                } else if is_empty {
                    DisplayBranch::Empty
                } else if error == Some("boom") {
                    DisplayBranch::Error
                } else {
                    DisplayBranch::Content
                };
                assert_eq!(branch, expected, "loading={is_loading} empty={is_empty} error={error:?}");
            }
        }
    }
}

#[test]
fn loading_wins_over_empty_and_error() {
    assert_eq!(select_branch(true, true, Some("Failed to load data")), DisplayBranch::Loading);
}

#[test]
fn empty_wins_over_error() {
    assert_eq!(select_branch(false, true, Some("Failed to load data")), DisplayBranch::Empty);
}

#[test]
fn empty_error_string_is_not_an_error() {
    assert_eq!(select_branch(false, false, Some("")), DisplayBranch::Content);
}

#[test]
fn display_inputs_default_selects_content() {
    assert_eq!(DisplayInputs::default().branch(), DisplayBranch::Content);
}

#[test]
fn display_inputs_reports_error_branch() {
    let inputs = DisplayInputs { error: Some("Failed to load data".to_owned()), ..DisplayInputs::default() };
    assert_eq!(inputs.branch(), DisplayBranch::Error);
}

// =============================================================
// Empty message
// =============================================================

#[test]
fn empty_text_prefers_caller_message() {
    assert_eq!(empty_text(Some("Nothing here yet")), "Nothing here yet");
}

#[test]
fn empty_text_falls_back_for_missing_or_blank_message() {
    assert_eq!(empty_text(None), DEFAULT_EMPTY_MESSAGE);
    assert_eq!(empty_text(Some("")), DEFAULT_EMPTY_MESSAGE);
}
