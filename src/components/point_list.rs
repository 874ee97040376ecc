//! Point List Component
//!
//! Card list of every plotted point. Clicking a card selects the point
//! without entering edit mode.

use leptos::prelude::*;

use crate::plot::{classify, PlotModel};

#[component]
pub fn PointList(model: RwSignal<PlotModel>) -> impl IntoView {
    view! {
        <Show when=move || !model.with(|m| m.points().is_empty())>
            <div class="point-list">
                <h3>"All Points"</h3>
                <div class="point-cards">
                    <For
                        each=move || model.with(|m| m.points().to_vec())
                        key=|p| p.id
                        children=move |point| {
                            let id = point.id;
                            let color = classify(point.x, point.y)
                                .map(|q| q.color)
                                .unwrap_or("#888");
                            let card_class = move || {
                                if model.with(|m| m.selected().map(|p| p.id) == Some(id)) {
                                    "point-card selected"
                                } else {
                                    "point-card"
                                }
                            };
                            let description = move || {
                                model.with(|m| {
                                    m.points()
                                        .iter()
                                        .find(|p| p.id == id)
                                        .filter(|p| !p.description.is_empty())
                                        .map(|p| truncated(&p.description, 30))
                                })
                            };
                            view! {
                                <div
                                    class=card_class
                                    on:click=move |_| model.update(|m| m.focus_point(id))
                                >
                                    <span
                                        class="point-dot"
                                        style=format!("background-color:{};", color)
                                    ></span>
                                    <div>
                                        <div class="point-coords">
                                            {format!("({}, {})", point.x, point.y)}
                                        </div>
                                        {move || description().map(|text| view! {
                                            <div class="point-description">{text}</div>
                                        })}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
