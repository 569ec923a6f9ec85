use super::*;

#[test]
fn cn_joins_fragments_with_single_spaces() {
    assert_eq!(cn(&["flex items-center", "gap-2"]), "flex items-center gap-2");
}

#[test]
fn cn_skips_empty_and_blank_fragments() {
    assert_eq!(cn(&["", "rounded-md", "   ", "p-6"]), "rounded-md p-6");
    assert_eq!(cn(&[]), "");
}

#[test]
fn cn_drops_duplicate_classes_keeping_first_position() {
    assert_eq!(cn(&["h-4 w-4", "animate-spin h-4"]), "h-4 w-4 animate-spin");
}

#[test]
fn when_returns_class_only_when_enabled() {
    assert_eq!(when(true, "backdrop-blur-sm"), "backdrop-blur-sm");
    assert_eq!(when(false, "backdrop-blur-sm"), "");
}
