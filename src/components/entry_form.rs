//! Entry Form Component
//!
//! New-entry form for the journal. Editing any macro field recomputes the
//! calories field once all three are present.

use leptos::prelude::*;

use crate::models::{EntryDraft, Macro};

fn parse_num(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

fn num_text(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Form for logging a new food entry. `on_add` returns whether the entry
/// was accepted; the form resets only then.
#[component]
pub fn EntryForm(#[prop(into)] on_add: Callback<EntryDraft, bool>) -> impl IntoView {
    let draft = RwSignal::new(EntryDraft::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if on_add.run(draft.get()) {
            draft.set(EntryDraft::default());
        }
    };

    view! {
        <form class="entry-form" on:submit=submit>
            <input
                type="text"
                placeholder="Food Name"
                prop:value=move || draft.with(|d| d.food.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.food = value);
                }
            />
            <div class="macro-grid">
                <input
                    type="number"
                    placeholder="Calories"
                    prop:value=move || draft.with(|d| num_text(d.calories))
                    on:input=move |ev| {
                        let value = parse_num(&event_target_value(&ev));
                        draft.update(|d| d.set_calories(value));
                    }
                />
                <input
                    type="number"
                    placeholder="Fat (g)"
                    prop:value=move || draft.with(|d| num_text(d.fat))
                    on:input=move |ev| {
                        let value = parse_num(&event_target_value(&ev));
                        draft.update(|d| d.set_macro(Macro::Fat, value));
                    }
                />
                <input
                    type="number"
                    placeholder="Carbs (g)"
                    prop:value=move || draft.with(|d| num_text(d.carbs))
                    on:input=move |ev| {
                        let value = parse_num(&event_target_value(&ev));
                        draft.update(|d| d.set_macro(Macro::Carbs, value));
                    }
                />
                <input
                    type="number"
                    placeholder="Protein (g)"
                    prop:value=move || draft.with(|d| num_text(d.protein))
                    on:input=move |ev| {
                        let value = parse_num(&event_target_value(&ev));
                        draft.update(|d| d.set_macro(Macro::Protein, value));
                    }
                />
            </div>
            <button type="submit" class="add-entry-btn">"Add Entry"</button>
        </form>
    }
}
