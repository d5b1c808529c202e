use crate::chart::{build_chart_with, ChartSpec};
use crate::config::ViewerConfig;
use crate::dataset::{Dataset, RegionId};
use crate::error::{ChartError, DatasetResult};
use std::rc::Rc;

/// Fetch-once cache of the dataset.
#[derive(Clone, Debug, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Ready(Rc<Dataset>),
    Failed(String),
}

/// What the viewer should display, in priority order.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading,
    Failed(String),
    NotFound(RegionId),
    Ready(ChartSpec),
}

impl LoadState {
    /// Move to `Loading`. Returns `true` only for the call that should issue the fetch.
    pub fn begin(&mut self) -> bool {
        match self {
            LoadState::Unloaded => {
                *self = LoadState::Loading;
                true
            }
            _ => false,
        }
    }

    /// Record the outcome of the fetch. Ignored unless a fetch is in flight.
    pub fn finish(&mut self, result: DatasetResult<Dataset>) {
        if !matches!(self, LoadState::Loading) {
            tracing::warn!("Dataset result arrived outside of a load, discarding");
            return;
        }
        *self = match result {
            Ok(dataset) => {
                tracing::info!(regions = dataset.len(), "Dataset loaded");
                LoadState::Ready(Rc::new(dataset))
            }
            Err(e) => {
                tracing::error!(error = %e, "Dataset load failed");
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Ready(ds) => Some(ds.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn view(&self, selected: RegionId) -> ViewState {
        self.view_with(selected, &ViewerConfig::default())
    }

    pub fn view_with(&self, selected: RegionId, cfg: &ViewerConfig) -> ViewState {
        match self {
            LoadState::Unloaded | LoadState::Loading => ViewState::Loading,
            LoadState::Failed(msg) => ViewState::Failed(msg.clone()),
            LoadState::Ready(ds) => match build_chart_with(ds, selected, cfg) {
                Ok(spec) => ViewState::Ready(spec),
                Err(ChartError::RegionNotFound(id)) => ViewState::NotFound(id),
                Err(e) => ViewState::Failed(e.to_string()),
            },
        }
    }
}
