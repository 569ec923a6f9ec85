//! Loading / empty / error / content switch for data-backed regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Host pages wrap fetched content in `ContentWithLoading` and feed it the
//! request's flags. Branch choice comes from `state::display::DisplayInputs`;
//! this module only maps the chosen branch to markup, preferring a caller
//! override when one is supplied for that branch.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::display::{DisplayBranch, DisplayInputs, empty_text};

/// Optional caller renderers, one slot per non-content branch.
#[derive(Clone, Default)]
pub struct BranchOverrides {
    pub loading: Option<ViewFn>,
    pub empty: Option<ViewFn>,
    pub error: Option<ViewFn>,
}

impl BranchOverrides {
    pub fn get(&self, branch: DisplayBranch) -> Option<&ViewFn> {
        match branch {
            DisplayBranch::Loading => self.loading.as_ref(),
            DisplayBranch::Empty => self.empty.as_ref(),
            DisplayBranch::Error => self.error.as_ref(),
            DisplayBranch::Content => None,
        }
    }
}

/// Render exactly one of loading, empty, error, or `children`.
///
/// Precedence: `is_loading`, then `is_empty`, then a non-empty `error`.
#[component]
pub fn ContentWithLoading(
    #[prop(into, default = Signal::stored(false))] is_loading: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] is_empty: Signal<bool>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional, into)] loading_component: Option<ViewFn>,
    #[prop(optional, into)] empty_component: Option<ViewFn>,
    #[prop(optional, into)] error_component: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let overrides = BranchOverrides {
        loading: loading_component,
        empty: empty_component,
        error: error_component,
    };

    move || {
        let inputs = DisplayInputs {
            is_loading: is_loading.get(),
            is_empty: is_empty.get(),
            error: error.get(),
        };
        let branch = inputs.branch();
        if let Some(custom) = overrides.get(branch) {
            return custom.run();
        }
        match branch {
            DisplayBranch::Loading => view! { <LoadingSpinner/> }.into_any(),
            DisplayBranch::Empty => {
                let text = empty_text(empty_message.as_deref()).to_owned();
                view! {
                    <div class="flex flex-col items-center justify-center py-8 text-center">
                        <p class="text-sm text-muted-foreground">{text}</p>
                    </div>
                }
                .into_any()
            }
            DisplayBranch::Error => view! {
                <div class="rounded-md border border-destructive/50 p-4 text-center">
                    <p class="text-sm text-destructive">{inputs.error.unwrap_or_default()}</p>
                </div>
            }
            .into_any(),
            DisplayBranch::Content => children().into_any(),
        }
    }
}
