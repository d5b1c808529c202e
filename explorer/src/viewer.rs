use crate::plotly;
use crate::view_helpers::status_line;
use brain_graph::{
    decode_dataset, DatasetError, DatasetResult, LoadState, RegionId, ViewState, ViewerConfig,
};
use gloo_net::http::Request;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub region: RegionId,
    pub config: ViewerConfig,
}

/// Fetches the dataset once and plots the selected region's connections.
pub struct BrainGraph {
    load: LoadState,
    view: ViewState,
    plot_ref: NodeRef,
}

pub enum Msg {
    Loaded(DatasetResult<Vec<u8>>),
}

impl BrainGraph {
    fn refresh(&mut self, ctx: &Context<Self>) {
        let props = ctx.props();
        self.view = self.load.view_with(props.region, &props.config);
    }
}

async fn fetch_blob(url: String) -> DatasetResult<Vec<u8>> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| DatasetError::Fetch(e.to_string()))?;
    if !response.ok() {
        return Err(DatasetError::HttpStatus {
            status: response.status(),
        });
    }
    response
        .binary()
        .await
        .map_err(|e| DatasetError::Fetch(e.to_string()))
}

impl Component for BrainGraph {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut load = LoadState::default();
        if load.begin() {
            let url = ctx.props().config.data_url.clone();
            tracing::info!(%url, "Fetching dataset");
            ctx.link()
                .send_future(async move { Msg::Loaded(fetch_blob(url).await) });
        }
        Self {
            load,
            view: ViewState::Loading,
            plot_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(blob) => {
                if let Ok(bytes) = &blob {
                    tracing::debug!(bytes = bytes.len(), "Dataset downloaded");
                }
                self.load.finish(blob.and_then(|bytes| decode_dataset(&bytes)));
                self.refresh(ctx);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // the dataset is reused, only the chart is rebuilt
        self.refresh(ctx);
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match status_line(&self.view) {
            Some((class, text)) => html! { <p class={class}>{text}</p> },
            None => html! {
                <div class="plot" ref={self.plot_ref.clone()}></div>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let ViewState::Ready(spec) = &self.view else {
            return;
        };
        let Some(target) = self.plot_ref.cast::<web_sys::Element>() else {
            return;
        };
        match plotly::react(&target, spec) {
            Ok(()) => tracing::debug!(
                region = ctx.props().region,
                traces = spec.data.len(),
                "Chart rendered"
            ),
            Err(e) => tracing::warn!(error = ?e, "Failed to render chart"),
        }
    }
}
