use crate::view_helpers::METHODOLOGY;
use brain_graph::colors::strength_gradient_css;
use yew::prelude::*;

#[function_component]
pub fn StrengthLegend() -> Html {
    html! {
        <div class="legend">
            <label>{"Edge Strength (Transcriptomic Similarity)"}</label>
            <div class="legend-bar" style={format!("background: {};", strength_gradient_css())}></div>
            <div class="legend-labels">
                <span>{"Weak"}</span>
                <span>{"Strong"}</span>
            </div>
        </div>
    }
}

#[function_component]
pub fn Methodology() -> Html {
    html! {
        <section class="panel methodology">
            <h2>{"Methodology Overview"}</h2>
            <ul>
                {
                    METHODOLOGY.iter().enumerate().map(|(i, (title, body))| html! {
                        <li><strong>{format!("{}. {}:", i + 1, title)}</strong>{" "}{*body}</li>
                    }).collect::<Html>()
                }
            </ul>
        </section>
    }
}
