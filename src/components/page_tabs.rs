//! Page Tabs Component
//!
//! Tab bar for switching between the journal and the plotter.

use leptos::prelude::*;

use crate::app::Page;

const PAGES: &[(Page, &str)] = &[
    (Page::Journal, "Food Journal"),
    (Page::Plotter, "Radical Results"),
];

#[component]
pub fn PageTabs(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="page-tab-bar">
            {PAGES.iter().map(|(target, label)| {
                let target = *target;
                let tab_class = move || {
                    if page.get() == target { "page-tab active" } else { "page-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_page.set(target)>
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
