//! Point Panel Component
//!
//! Detail panel for the selected point: coordinates, axes readout, and the
//! description editor.

use leptos::prelude::*;

use crate::plot::PlotModel;

#[component]
pub fn PointPanel(model: RwSignal<PlotModel>) -> impl IntoView {
    // Track only the selected point's identity so draft keystrokes don't
    // rebuild the panel (and drop textarea focus).
    let selected = Memo::new(move |_| model.with(|m| m.selected().map(|p| (p.id, p.x, p.y))));
    let editing = move || model.with(|m| m.is_editing());

    view! {
        {move || selected.get().map(|(id, x, y)| {
            view! {
                <div class="point-panel">
                    <div class="point-panel-header">
                        <h3>{format!("Selected Point: ({}, {})", x, y)}</h3>
                        <div class="point-panel-actions">
                            <Show when=editing>
                                <button
                                    class="save-btn"
                                    on:click=move |_| {
                                        let text = model.with(|m| m.draft().to_string());
                                        model.update(|m| m.save_description(id, text));
                                    }
                                >
                                    "Save"
                                </button>
                            </Show>
                            <Show when=move || !editing()>
                                <button
                                    class="edit-btn"
                                    on:click=move |_| model.update(|m| m.start_editing())
                                >
                                    "Edit Description"
                                </button>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| model.update(|m| m.delete_point(id))
                                >
                                    "Delete"
                                </button>
                            </Show>
                        </div>
                    </div>

                    <div class="point-axes">
                        <div class="axis-readout">
                            <b>"Effectiveness: "</b>{x}
                        </div>
                        <div class="axis-readout">
                            <b>"Vibes: "</b>{y}
                        </div>
                    </div>

                    <Show when=editing>
                        <textarea
                            class="description-editor"
                            placeholder="Enter description for this point..."
                            rows=3
                            prop:value=move || model.with(|m| m.draft().to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                model.update(|m| m.set_draft(text));
                            }
                        ></textarea>
                    </Show>
                    <Show when=move || !editing()>
                        <div class="description-view">
                            {move || {
                                let description = model
                                    .with(|m| m.selected().map(|p| p.description.clone()))
                                    .unwrap_or_default();
                                if description.is_empty() {
                                    view! { <p class="description-empty">"No description added yet"</p> }
                                        .into_any()
                                } else {
                                    view! { <p>{description}</p> }.into_any()
                                }
                            }}
                        </div>
                    </Show>
                </div>
            }
        })}
    }
}
