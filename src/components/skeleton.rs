//! Skeleton placeholders for cards, tables, forms, and free-form blocks.
//!
//! DESIGN
//! ======
//! Repeated placeholder bars are grouped under one labelled container so a
//! screen reader announces a single pending region, not one per bar.

use leptos::prelude::*;

use crate::util::class_names::{cn, when};

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod skeleton_test;

/// Animated placeholder block with inline dimensions.
#[component]
pub fn SkeletonLoader(
    #[prop(into, default = "100%".to_owned())] width: String,
    #[prop(into, default = "1rem".to_owned())] height: String,
    #[prop(optional)] rounded: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = block_class(rounded, class.as_deref());
    let style = format!("width: {width}; height: {height};");

    view! { <div class=class style=style aria-hidden="true"></div> }
}

/// Card-shaped placeholder with `lines` text bars.
#[component]
pub fn CardLoader(
    #[prop(default = 3)] lines: usize,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = cn(&["rounded-lg border bg-card p-6 animate-pulse", class.as_deref().unwrap_or_default()]);

    view! {
        <div class=class role="status" aria-label="Loading content">
            <div class="space-y-3">
                {card_line_widths(lines)
                    .into_iter()
                    .map(|width| {
                        let line_class = format!("h-4 rounded bg-muted {width}");
                        view! { <div class=line_class></div> }
                    })
                    .collect_view()}
            </div>
            <span class="sr-only">"Loading content"</span>
        </div>
    }
}

/// Table placeholder: one header row plus `rows` body rows.
#[component]
pub fn TableLoader(
    #[prop(default = 5)] rows: usize,
    #[prop(default = 4)] columns: usize,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = cn(&["relative w-full overflow-auto", class.as_deref().unwrap_or_default()]);

    view! {
        <div class=class>
            <table class="w-full caption-bottom text-sm" aria-busy="true">
                <thead>
                    <tr class="border-b">
                        {(0..columns)
                            .map(|_| view! {
                                <th class="h-12 px-4 text-left">
                                    <div class="h-4 w-20 animate-pulse rounded bg-muted"></div>
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {(0..rows)
                        .map(|_| view! {
                            <tr class="border-b">
                                {(0..columns)
                                    .map(|_| view! {
                                        <td class="p-4">
                                            <div class="h-4 w-full animate-pulse rounded bg-muted"></div>
                                        </td>
                                    })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Form placeholder: `fields` label/input groups and a submit button bar.
#[component]
pub fn FormLoader(
    #[prop(default = 3)] fields: usize,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = cn(&["space-y-6", class.as_deref().unwrap_or_default()]);

    view! {
        <div class=class role="form" aria-label="Loading form" aria-busy="true">
            {(0..fields)
                .map(|_| view! {
                    <div class="space-y-2">
                        <div class="h-4 w-24 animate-pulse rounded bg-muted"></div>
                        <div class="h-10 w-full animate-pulse rounded-md bg-muted"></div>
                    </div>
                })
                .collect_view()}
            <div class="h-10 w-32 animate-pulse rounded-md bg-muted"></div>
        </div>
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn block_class(rounded: bool, extra: Option<&str>) -> String {
    cn(&[
        "animate-pulse bg-muted",
        when(rounded, "rounded-full"),
        when(!rounded, "rounded-md"),
        extra.unwrap_or_default(),
    ])
}

/// Width class per card line; the last line of several is shortened.
fn card_line_widths(lines: usize) -> Vec<&'static str> {
    (0..lines)
        .map(|i| if lines > 1 && i + 1 == lines { "w-2/3" } else { "w-full" })
        .collect()
}
