//! Gallery page rendering every widget, plus the SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::content_with_loading::ContentWithLoading;
use crate::components::loading_spinner::{ButtonLoader, FullPageLoader, LoadingOverlay, LoadingSpinner, LoadingState};
use crate::components::section_card::SectionCard;
use crate::components::skeleton::{CardLoader, FormLoader, SkeletonLoader, TableLoader};
use crate::util::variant::{ButtonSize, ButtonVariant, SpinnerSize};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <Gallery/>
            </body>
        </html>
    }
}

/// Which branch the content-state demo is forced into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DemoState {
    #[default]
    Loading,
    Empty,
    Error,
    Ready,
}

impl DemoState {
    fn next(self) -> Self {
        match self {
            Self::Loading => Self::Empty,
            Self::Empty => Self::Error,
            Self::Error => Self::Ready,
            Self::Ready => Self::Loading,
        }
    }
}

/// Root component: one section card per widget family.
#[component]
pub fn Gallery() -> impl IntoView {
    provide_meta_context();

    let demo = RwSignal::new(DemoState::default());
    let overlay_visible = RwSignal::new(false);

    let is_loading = Signal::derive(move || demo.get() == DemoState::Loading);
    let is_empty = Signal::derive(move || demo.get() == DemoState::Empty);
    let error = Signal::derive(move || (demo.get() == DemoState::Error).then(|| "Failed to load data".to_owned()));

    let cycle_demo = move |_| demo.update(|d| *d = d.next());
    let toggle_overlay = move |_| overlay_visible.update(|v| *v = !*v);

    view! {
        <Stylesheet id="leptos" href="/pkg/loading-ui.css"/>
        <Title text="Loading UI"/>

        <main class="mx-auto max-w-4xl space-y-8 p-8">
            <SectionCard title="Spinners" description="Sizes, labels, and the busy button" collapsible=true>
                <div class="flex items-end gap-6">
                    <LoadingSpinner size=SpinnerSize::Sm/>
                    <LoadingSpinner/>
                    <LoadingSpinner size=SpinnerSize::Lg label="Processing..."/>
                    <ButtonLoader variant=ButtonVariant::Destructive size=ButtonSize::Sm>"Deleting"</ButtonLoader>
                    <ButtonLoader>"Save"</ButtonLoader>
                </div>
            </SectionCard>

            <SectionCard title="Skeletons" collapsible=true default_expanded=false>
                <div class="space-y-6">
                    <SkeletonLoader width="200px" height="50px"/>
                    <SkeletonLoader width="48px" height="48px" rounded=true/>
                    <CardLoader lines=4/>
                    <TableLoader rows=3 columns=2/>
                    <FormLoader fields=2/>
                </div>
            </SectionCard>

            <SectionCard
                title="Content states"
                description="Cycles loading, empty, error, and content"
                header_action=move || view! {
                    <button class="rounded-md border px-3 py-1 text-sm" on:click=cycle_demo>"Next state"</button>
                }
            >
                <ContentWithLoading
                    is_loading=is_loading
                    is_empty=is_empty
                    error=error
                    empty_message="No data available"
                >
                    <p>"Content"</p>
                </ContentWithLoading>
                <LoadingState is_loading=is_loading>
                    <p>"Loaded"</p>
                </LoadingState>
            </SectionCard>

            <SectionCard
                title="Overlay"
                header_action=move || view! {
                    <button class="rounded-md border px-3 py-1 text-sm" on:click=toggle_overlay>"Toggle"</button>
                }
            >
                <div class="relative h-40 rounded-md border">
                    <p class="p-4">"Underlying content stays mounted."</p>
                    <LoadingOverlay visible=overlay_visible message="Processing..." blur=true/>
                </div>
            </SectionCard>

            <SectionCard title="Full page loader" collapsible=true default_expanded=false>
                <div class="relative h-64 overflow-hidden">
                    <FullPageLoader message="Loading application..."/>
                </div>
            </SectionCard>
        </main>
    }
}
