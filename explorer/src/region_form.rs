use brain_graph::{RegionForm as FormState, RegionId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub initial: RegionId,
    pub max: RegionId,
    pub onsubmit: Callback<RegionId>,
}

/// Numeric region picker. Typing only edits the field, submitting commits the clamped value.
#[function_component]
pub fn RegionForm(props: &Props) -> Html {
    let form = use_state(|| FormState::with_max(props.initial, props.max));

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let mut next = *form;
            next.set_input(&input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let emit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = *form;
            let region = next.submit();
            tracing::debug!(input = form.input(), region, "Region submitted");
            form.set(next);
            emit.emit(region);
        })
    };

    html! {
        <form class="region-form" {onsubmit}>
            <label for="regionInput">{format!("Select Brain Region (0–{}):", props.max)}</label>
            <input
                id="regionInput"
                type="number"
                min="0"
                max={props.max.to_string()}
                value={form.input().to_string()}
                {oninput}
            />
            <button type="submit">{"View Connections"}</button>
        </form>
    }
}
