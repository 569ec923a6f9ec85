//! Spinners, overlays, and the busy button.
//!
//! DESIGN
//! ======
//! Every spinner is a `role="status"` element labelled for assistive
//! technology. Wrappers (full page, overlay) add their own roles around it
//! rather than relabelling the status element.

use leptos::prelude::*;

use crate::util::class_names::{cn, when};
use crate::util::variant::{ButtonSize, ButtonVariant, SpinnerSize};

#[cfg(test)]
#[path = "loading_spinner_test.rs"]
mod loading_spinner_test;

pub const DEFAULT_LABEL: &str = "Loading...";

const FULL_SCREEN_CLASS: &str = "fixed inset-0 z-50 flex items-center justify-center bg-background/80 backdrop-blur-sm";
const BUTTON_BASE_CLASS: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium \
     ring-offset-background transition-colors focus-visible:outline-none \
     disabled:pointer-events-none disabled:opacity-50";

/// Animated spinner with an accessible status label.
#[component]
pub fn LoadingSpinner(
    #[prop(optional, into)] size: SpinnerSize,
    #[prop(into, default = DEFAULT_LABEL.to_owned())] label: String,
    #[prop(optional)] full_screen: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let wrapper_class = spinner_wrapper_class(full_screen, class.as_deref());
    let icon_class = spinner_icon_class(size);
    let sr_label = label.clone();

    view! {
        <div class=wrapper_class>
            <div role="status" aria-label=label class="flex items-center justify-center">
                <svg
                    class=icon_class
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    aria-hidden="true"
                >
                    <path d="M21 12a9 9 0 1 1-6.219-8.56"></path>
                </svg>
                <span class="sr-only">{sr_label}</span>
            </div>
        </div>
    }
}

/// Centered page-level loader announced as a busy live region.
#[component]
pub fn FullPageLoader(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div
            class="flex min-h-screen flex-col items-center justify-center gap-4"
            role="alert"
            aria-busy="true"
            aria-live="polite"
        >
            <LoadingSpinner size=SpinnerSize::Lg/>
            {message.map(|text| view! { <p class="text-sm text-muted-foreground">{text}</p> })}
        </div>
    }
}

/// Disabled button shown while its action is in flight.
#[component]
pub fn ButtonLoader(
    #[prop(optional, into)] variant: ButtonVariant,
    #[prop(optional, into)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size) disabled=true aria-busy="true">
            <svg
                class="mr-2 h-4 w-4 animate-spin"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                aria-hidden="true"
            >
                <path d="M21 12a9 9 0 1 1-6.219-8.56"></path>
            </svg>
            {children()}
        </button>
    }
}

/// Layer drawn over its positioned parent while a blocking operation runs.
///
/// Renders nothing while `visible` is false; the underlying content stays in
/// the tree either way.
#[component]
pub fn LoadingOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional)] blur: bool,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let overlay_class = overlay_class(blur, dark);

    move || {
        visible.get().then(|| {
            let message = message.clone();
            view! {
                <div class=overlay_class.clone()>
                    <div class="flex flex-col items-center gap-2">
                        <LoadingSpinner/>
                        {message.map(|text| view! { <p class="text-sm text-muted-foreground">{text}</p> })}
                    </div>
                </div>
            }
        })
    }
}

/// Two-way switch between a loader and the wrapped content.
#[component]
pub fn LoadingState(
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(optional, into)] loader: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        if is_loading.get() {
            loader.as_ref().map_or_else(|| view! { <LoadingSpinner/> }.into_any(), ViewFn::run)
        } else {
            children().into_any()
        }
    }
}

// =============================================================================
// CLASS HELPERS
// =============================================================================

fn spinner_wrapper_class(full_screen: bool, extra: Option<&str>) -> String {
    cn(&[
        when(!full_screen, "flex items-center justify-center"),
        when(full_screen, FULL_SCREEN_CLASS),
        extra.unwrap_or_default(),
    ])
}

fn spinner_icon_class(size: SpinnerSize) -> String {
    cn(&["animate-spin text-primary", size.class()])
}

fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    cn(&[BUTTON_BASE_CLASS, variant.class(), size.class()])
}

fn overlay_class(blur: bool, dark: bool) -> String {
    cn(&[
        "absolute inset-0 z-50 flex items-center justify-center",
        when(blur, "backdrop-blur-sm"),
        if dark { "bg-black/80" } else { "bg-background/80" },
    ])
}
