use brain_graph::{RegionId, ViewerConfig};
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeWebConsoleWriter};
use yew::prelude::*;
mod page;
mod plotly;
mod region_form;
mod view_helpers;
mod viewer;
use crate::page::{Methodology, StrengthLegend};
use crate::region_form::RegionForm;
use crate::viewer::BrainGraph;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(|| ViewerConfig::with_data_url(option_env!("BRAIN_GRAPH_DATA_URL")));
    let region = use_state(|| 0 as RegionId);

    let onselect = {
        let region = region.clone();
        Callback::from(move |selected: RegionId| {
            tracing::info!(region = selected, "Region selected");
            region.set(selected);
        })
    };

    html! {
        <main>
            <h1>{"Transcriptomic Brain Explorer"}</h1>
            <div class="panel">
                <RegionForm initial={*region} max={config.max_region} onsubmit={onselect} />
                <div class="plot-frame">
                    <BrainGraph region={*region} config={(*config).clone()} />
                </div>
                <StrengthLegend />
            </div>
            <Methodology />
            <footer>{"Created by Jose Coyt • Interactive transcriptomic graph viewer"}</footer>
        </main>
    }
}

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
    yew::Renderer::<App>::new().render();
}
