//! Clear All Button Component
//!
//! Inline confirmation for wiping every stored day. The deletion is
//! irreversible, so it only fires after an explicit second click.

use leptos::prelude::*;

#[component]
pub fn ClearAllButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="clear-all-btn"
                on:click=move |_| set_confirming.set(true)
            >
                "Clear All"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-all-confirm">
                <span class="clear-all-confirm-text">
                    "Delete all entries? This cannot be undone."
                </span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
