use super::*;

fn tokens(class: &str) -> Vec<&str> {
    class.split_whitespace().collect()
}

#[test]
fn wrapper_carries_custom_class() {
    let class = spinner_wrapper_class(false, Some("custom-class"));
    assert!(tokens(&class).contains(&"custom-class"));
    assert!(!tokens(&class).contains(&"fixed"));
}

#[test]
fn full_screen_wrapper_is_fixed_to_viewport() {
    let class = spinner_wrapper_class(true, None);
    let tokens = tokens(&class);
    assert!(tokens.contains(&"fixed"));
    assert!(tokens.contains(&"inset-0"));
}

#[test]
fn icon_class_uses_size_dimensions() {
    assert!(spinner_icon_class(SpinnerSize::Sm).ends_with("h-4 w-4"));
    assert!(spinner_icon_class(SpinnerSize::Lg).ends_with("h-8 w-8"));
    assert!(spinner_icon_class(SpinnerSize::Default).starts_with("animate-spin"));
}

#[test]
fn button_class_combines_variant_and_size() {
    let class = button_class(ButtonVariant::Destructive, ButtonSize::Sm);
    let tokens = tokens(&class);
    assert!(tokens.contains(&"bg-destructive"));
    assert!(tokens.contains(&"h-9"));
    assert!(!tokens.contains(&"h-10"));
}

#[test]
fn overlay_class_applies_blur_and_dark_backdrop() {
    let plain = overlay_class(false, false);
    assert!(!plain.contains("backdrop-blur-sm"));
    assert!(tokens(&plain).contains(&"bg-background/80"));

    let styled = overlay_class(true, true);
    assert!(tokens(&styled).contains(&"backdrop-blur-sm"));
    assert!(tokens(&styled).contains(&"bg-black/80"));
    assert!(!tokens(&styled).contains(&"bg-background/80"));
}
