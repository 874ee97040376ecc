//! Alert Banner Component
//!
//! Transient notification banner fed by the app context; notices dismiss
//! themselves after a fixed interval.

use leptos::prelude::*;

use crate::context::{use_app_context, Severity};

#[component]
pub fn AlertBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.severity {
                Severity::Info => "alert-banner info",
                Severity::Destructive => "alert-banner destructive",
            };
            view! {
                <div class=class role="alert">
                    {notice.message}
                </div>
            }
        })}
    }
}
