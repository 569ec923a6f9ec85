//! Card with a titled header and an optionally collapsible body.
//!
//! DESIGN
//! ======
//! The header owns the toggle handler. The header action sits inside the
//! header but stops click propagation at its own wrapper, so activating it
//! never reaches the toggle.

use leptos::prelude::*;

use crate::state::expand::ExpandState;
use crate::util::class_names::{cn, when};

#[cfg(test)]
#[path = "section_card_test.rs"]
mod section_card_test;

const CARD_CLASS: &str = "rounded-lg border bg-card text-card-foreground shadow-sm overflow-hidden";
const HEADER_CLASS: &str = "flex flex-col space-y-1.5 p-6";
const HEADER_INTERACTIVE_CLASS: &str = "cursor-pointer transition-colors hover:bg-muted/50";

#[component]
pub fn SectionCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: ChildrenFn,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] header_action: Option<ViewFn>,
    #[prop(optional)] collapsible: bool,
    #[prop(default = true)] default_expanded: bool,
) -> impl IntoView {
    let state = RwSignal::new(ExpandState::new(collapsible, default_expanded));

    let collapsible = state.get_untracked().is_collapsible();

    let on_header_click = move |_| {
        toggle_section(state);
    };

    let card_class = cn(&[CARD_CLASS, class.as_deref().unwrap_or_default()]);
    let header_class = cn(&[HEADER_CLASS, when(collapsible, HEADER_INTERACTIVE_CLASS)]);

    view! {
        <div class=card_class>
            <div class=header_class on:click=on_header_click>
                <div class="flex items-center justify-between">
                    <div>
                        <h3 class="flex items-center gap-2 text-2xl font-semibold leading-none tracking-tight">
                            {title}
                            {collapsible
                                .then(|| view! {
                                    <div class=move || state.get().indicator_class() aria-hidden="true">
                                        "▼"
                                    </div>
                                })}
                        </h3>
                        {description.map(|text| view! { <p class="text-sm text-muted-foreground">{text}</p> })}
                    </div>
                    {header_action
                        .map(|action| view! {
                            <div
                                class="section-card__action"
                                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                            >
                                {action.run()}
                            </div>
                        })}
                </div>
            </div>
            <Show when=move || state.get().content_visible()>
                <div class="p-6 pt-0">{children()}</div>
            </Show>
        </div>
    }
}

/// Header click handler body. Returns whether the card changed state.
fn toggle_section(state: RwSignal<ExpandState>) -> bool {
    let mut changed = false;
    state.update(|s| changed = s.toggle());
    changed
}
