//! Vibetrack App
//!
//! Root component: notification context, tab bar, and the two tool pages.

use leptos::prelude::*;

use crate::components::{AlertBanner, JournalPage, PageTabs, PlotPage};
use crate::context::AppContext;

/// The two tools the app bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Journal,
    Plotter,
}

#[component]
pub fn App() -> impl IntoView {
    let notice = signal(None);
    provide_context(AppContext::new(notice));

    let (page, set_page) = signal(Page::Journal);

    view! {
        <div class="app-layout">
            <AlertBanner />
            <PageTabs page=page set_page=set_page />

            <main class="main-content">
                {move || match page.get() {
                    Page::Journal => view! { <JournalPage /> }.into_any(),
                    Page::Plotter => view! { <PlotPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
