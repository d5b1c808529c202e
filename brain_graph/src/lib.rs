//! Data side of the transcriptomic brain explorer: dataset decoding,
//! validation, the fetch-once loader and Plotly chart construction.

pub mod chart;
pub mod colors;
pub mod config;
pub mod dataset;
pub mod decode;
pub mod error;
pub mod loader;
pub mod region_input;

pub use chart::{build_chart, build_chart_with, ChartSpec, Trace};
pub use config::ViewerConfig;
pub use dataset::{Connection, Dataset, Region, RegionId};
pub use decode::{decode_dataset, parse_dataset};
pub use error::{ChartError, DatasetError, DatasetResult};
pub use loader::{LoadState, ViewState};
pub use region_input::{
    clamp_region, clamp_region_to, parse_region_input, RegionForm, MAX_REGION_INDEX,
};
