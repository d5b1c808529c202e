//! Plotly.js chart specification for a region's connections.
//!
//! The structures below serialize to the JSON shape Plotly.js expects for
//! `Plotly.react(div, data, layout, config)`. Rendering and interaction stay
//! on the JavaScript side.

use crate::colors::{cluster_color, strength_color, SELECTED_COLOR};
use crate::config::ViewerConfig;
use crate::dataset::{Dataset, RegionId};
use crate::error::{ChartError, ChartResult};
use serde::Serialize;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Line {
    pub width: f64,
    pub color: &'static str,
}

/// One straight segment between the selected region and a neighbour.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
    pub line: Line,
    pub hoverinfo: &'static str,
    pub showlegend: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Marker {
    pub size: f64,
    pub color: Vec<&'static str>,
    pub opacity: f64,
}

/// Every region of the dataset as a point, with per-point colour and hover text.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub marker: Marker,
    pub text: Vec<String>,
    pub hoverinfo: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Trace {
    Line(LineTrace),
    Markers(MarkerTrace),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: Title,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub bgcolor: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Layout {
    pub title: Title,
    pub showlegend: bool,
    pub margin: Margin,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub scene: Scene,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub display_mode_bar: bool,
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: false,
            responsive: true,
        }
    }
}

/// Everything handed to the plotting surface in one call.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl ChartSpec {
    pub fn line_traces(&self) -> impl Iterator<Item = &LineTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Line(l) => Some(l),
            Trace::Markers(_) => None,
        })
    }

    pub fn marker_trace(&self) -> Option<&MarkerTrace> {
        self.data.iter().find_map(|t| match t {
            Trace::Markers(m) => Some(m),
            Trace::Line(_) => None,
        })
    }
}

/// Build the chart for `selected` with default styling.
pub fn build_chart(dataset: &Dataset, selected: RegionId) -> ChartResult<ChartSpec> {
    build_chart_with(dataset, selected, &ViewerConfig::default())
}

/// Build the chart for `selected`: edge segments first, then one marker trace.
pub fn build_chart_with(
    dataset: &Dataset,
    selected: RegionId,
    cfg: &ViewerConfig,
) -> ChartResult<ChartSpec> {
    let region = dataset
        .get(selected)
        .ok_or(ChartError::RegionNotFound(selected))?;
    let from = region.coords;

    let mut data = Vec::with_capacity(region.connections.len() + 1);
    for conn in &region.connections {
        let to = dataset
            .get(conn.target)
            .ok_or(ChartError::DanglingTarget {
                region: selected,
                target: conn.target,
            })?
            .coords;
        data.push(Trace::Line(LineTrace {
            kind: "scatter3d",
            mode: "lines",
            x: [from[0], to[0]],
            y: [from[1], to[1]],
            z: [from[2], to[2]],
            line: Line {
                width: cfg.edge_width,
                color: strength_color(conn.strength),
            },
            hoverinfo: "none",
            showlegend: false,
        }));
    }

    let n = dataset.len();
    let (mut xs, mut ys, mut zs) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    let mut colors = Vec::with_capacity(n);
    let mut text = Vec::with_capacity(n);
    for (id, r) in dataset.iter() {
        xs.push(r.coords[0]);
        ys.push(r.coords[1]);
        zs.push(r.coords[2]);
        colors.push(if id == selected {
            SELECTED_COLOR
        } else {
            cluster_color(r.label)
        });
        text.push(hover_text(id, r.label));
    }
    data.push(Trace::Markers(MarkerTrace {
        kind: "scatter3d",
        mode: "markers",
        x: xs,
        y: ys,
        z: zs,
        marker: Marker {
            size: cfg.marker_size,
            color: colors,
            opacity: 0.9,
        },
        text,
        hoverinfo: "text",
    }));

    tracing::debug!(
        region = selected,
        edges = region.connections.len(),
        markers = n,
        "Chart built"
    );

    Ok(ChartSpec {
        data,
        layout: layout(selected),
        config: PlotConfig::default(),
    })
}

fn hover_text(id: RegionId, label: Option<i64>) -> String {
    match label {
        Some(l) => format!("Region {id}<br>Cluster: {l}"),
        None => format!("Region {id}<br>Cluster: none"),
    }
}

fn layout(selected: RegionId) -> Layout {
    Layout {
        title: Title::new(format!("Connections from Region {selected}")),
        showlegend: false,
        margin: Margin {
            t: 40,
            b: 0,
            l: 0,
            r: 0,
        },
        paper_bgcolor: TRANSPARENT,
        plot_bgcolor: TRANSPARENT,
        scene: Scene {
            xaxis: Axis {
                title: Title::new("X (MNI)"),
            },
            yaxis: Axis {
                title: Title::new("Y (MNI)"),
            },
            zaxis: Axis {
                title: Title::new("Z (MNI)"),
            },
            bgcolor: TRANSPARENT,
        },
    }
}
