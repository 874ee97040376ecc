//! Plot Page Component
//!
//! The Radical Results plotter: quadrant overlays, axes, click-to-add
//! points, the average marker, and the detail panels below the plot.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{PointList, PointPanel};
use crate::plot::{classify, PlotModel, QUADRANTS};

const GRID_STEPS: [i32; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];
const AXIS_VALUES: [i32; 11] = [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5];

/// Percent offset from the left edge for a logical x.
fn left_pct(x: f64) -> f64 {
    (x + 5.0) * 10.0
}

/// Percent offset from the top edge for a logical y.
fn top_pct(y: f64) -> f64 {
    (5.0 - y) * 10.0
}

#[component]
pub fn PlotPage() -> impl IntoView {
    let model = RwSignal::new(PlotModel::new());
    let average = Memo::new(move |_| model.with(|m| m.average()));
    let point_count = Memo::new(move |_| model.with(|m| m.points().len()));

    let on_plot_click = move |ev: web_sys::MouseEvent| {
        let target = ev.current_target().unwrap();
        let element = target.dyn_into::<web_sys::Element>().unwrap();
        let rect = element.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let frac_x = (ev.client_x() as f64 - rect.left()) / rect.width();
        let frac_y = (ev.client_y() as f64 - rect.top()) / rect.height();
        model.update(|m| {
            m.add_point(frac_x, frac_y);
        });
    };

    view! {
        <section class="plot-page">
            <h1>"Radical Results Plotter"</h1>
            <p class="plot-hint">"Click anywhere on the graph to add a new point"</p>

            <div class="plot-area" on:click=on_plot_click>
                // Quadrant backgrounds at 20% opacity.
                {QUADRANTS.iter().map(|q| {
                    let style = format!(
                        "left:{}%;top:{}%;width:{}%;height:{}%;background-color:{}20;",
                        left_pct(q.x[0]),
                        top_pct(q.y[1]),
                        (q.x[1] - q.x[0]) * 10.0,
                        (q.y[1] - q.y[0]) * 10.0,
                        q.color,
                    );
                    view! {
                        <div class="quadrant" style=style>
                            <span class="quadrant-name">{q.name}</span>
                        </div>
                    }
                }).collect_view()}

                // Axes and gridlines.
                <div class="axis-x"></div>
                <div class="axis-y"></div>
                {GRID_STEPS.iter().map(|v| view! {
                    <div class="grid-line vertical" style=format!("left:{}%;", left_pct(*v as f64))></div>
                }).collect_view()}
                {GRID_STEPS.iter().map(|v| view! {
                    <div class="grid-line horizontal" style=format!("top:{}%;", top_pct(*v as f64))></div>
                }).collect_view()}

                // Axis captions.
                <div class="axis-caption top">"Good Vibes"</div>
                <div class="axis-caption bottom">"Bad Vibes"</div>
                <div class="axis-caption left">"Ineffective"</div>
                <div class="axis-caption right">"Effective"</div>

                // Axis values.
                {AXIS_VALUES.iter().map(|v| view! {
                    <div class="axis-value x" style=format!("left:{}%;", left_pct(*v as f64))>{*v}</div>
                }).collect_view()}
                {AXIS_VALUES.iter().map(|v| view! {
                    <div class="axis-value y" style=format!("top:{}%;", top_pct(*v as f64))>{*v}</div>
                }).collect_view()}

                // Points.
                <For
                    each=move || model.with(|m| m.points().to_vec())
                    key=|p| p.id
                    children=move |point| {
                        let id = point.id;
                        let style = format!(
                            "left:{}%;top:{}%;",
                            left_pct(point.x),
                            top_pct(point.y),
                        );
                        let is_selected =
                            move || model.with(|m| m.selected().map(|p| p.id) == Some(id));
                        let marker_style = move || {
                            let color = if is_selected() {
                                "red".to_string()
                            } else {
                                classify(point.x, point.y)
                                    .map(|q| q.color.to_string())
                                    .unwrap_or_else(|| "#888".to_string())
                            };
                            format!("background-color:{};", color)
                        };
                        let label = move || {
                            model.with(|m| {
                                m.selected()
                                    .filter(|p| p.id == id && !p.description.is_empty())
                                    .map(|p| truncated(&p.description, 20))
                            })
                        };
                        view! {
                            <div
                                class="plot-point"
                                style=style
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    model.update(|m| m.select_point(id));
                                }
                            >
                                <div
                                    class=move || if is_selected() { "point-marker selected" } else { "point-marker" }
                                    style=marker_style
                                ></div>
                                {move || label().map(|text| view! {
                                    <div class="point-label">{text}</div>
                                })}
                            </div>
                        }
                    }
                />

                // Average marker, defined once two points exist.
                {move || average.get().map(|(x, y)| view! {
                    <div
                        class="average-point"
                        style=format!("left:{}%;top:{}%;", left_pct(x), top_pct(y))
                    >
                        <div class="average-marker"></div>
                        <div class="average-label">
                            {format!("Average ({}, {})", x, y)}
                        </div>
                    </div>
                })}
            </div>

            <PointPanel model=model />

            {move || average.get().map(|(x, y)| view! {
                <div class="average-info">
                    <h3>{format!("Average Position: ({}, {})", x, y)}</h3>
                    <p>
                        {move || format!(
                            "This represents the average position of all {} points on the graph.",
                            point_count.get()
                        )}
                    </p>
                </div>
            })}

            <PointList model=model />
        </section>
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
