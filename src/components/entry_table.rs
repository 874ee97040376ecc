//! Entry Table Component
//!
//! The day's entries with per-row delete and a totals row.

use leptos::prelude::*;

use crate::models::{DailyTotals, FoodEntry};

fn cell(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[component]
pub fn EntryTable(
    entries: ReadSignal<Vec<FoodEntry>>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let totals = move || DailyTotals::of(&entries.get());

    view! {
        <div class="entry-table">
            <div class="entry-row header">
                <div>"Food"</div>
                <div>"Calories"</div>
                <div>"Fat (g)"</div>
                <div>"Carbs (g)"</div>
                <div>"Protein (g)"</div>
            </div>

            <Show when=move || entries.get().is_empty()>
                <div class="entry-table-empty">
                    "No entries added yet. Add your first food entry above!"
                </div>
            </Show>

            <For
                each=move || entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class="entry-row">
                            <div>{entry.food.clone()}</div>
                            <div>{cell(entry.calories)}</div>
                            <div>{cell(entry.fat)}</div>
                            <div>{cell(entry.carbs)}</div>
                            <div class="entry-last-cell">
                                {cell(entry.protein)}
                                <button
                                    class="delete-entry-btn"
                                    on:click=move |_| on_delete.run(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />

            <Show when=move || !entries.get().is_empty()>
                <div class="entry-row totals">
                    <div>"Daily Total"</div>
                    <div>{move || round1(totals().calories).to_string()}</div>
                    <div>{move || round1(totals().fat).to_string()}</div>
                    <div>{move || round1(totals().carbs).to_string()}</div>
                    <div>{move || round1(totals().protein).to_string()}</div>
                </div>
            </Show>
        </div>
    }
}
