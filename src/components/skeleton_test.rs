use super::*;

#[test]
fn block_class_toggles_full_rounding() {
    let rounded = block_class(true, None);
    assert!(rounded.contains("rounded-full"));
    assert!(!rounded.contains("rounded-md"));

    let square = block_class(false, None);
    assert!(square.contains("rounded-md"));
    assert!(!square.contains("rounded-full"));
}

#[test]
fn block_class_keeps_pulse_and_custom_class() {
    let class = block_class(false, Some("custom-skeleton"));
    assert!(class.starts_with("animate-pulse bg-muted"));
    assert!(class.ends_with("custom-skeleton"));
}

#[test]
fn card_line_widths_has_one_entry_per_line() {
    assert_eq!(card_line_widths(4).len(), 4);
    assert!(card_line_widths(0).is_empty());
}

#[test]
fn card_line_widths_shortens_only_the_last_of_several() {
    assert_eq!(card_line_widths(3), vec!["w-full", "w-full", "w-2/3"]);
    assert_eq!(card_line_widths(1), vec!["w-full"]);
}
