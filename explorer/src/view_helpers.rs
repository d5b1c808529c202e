use brain_graph::ViewState;

/// CSS class and message for every non-chart state, `None` when a chart should be drawn.
pub fn status_line(view: &ViewState) -> Option<(&'static str, String)> {
    match view {
        ViewState::Loading => Some(("status", "Loading data...".to_string())),
        ViewState::Failed(reason) => Some((
            "status error",
            format!("Could not load the dataset. {reason}"),
        )),
        ViewState::NotFound(_) => Some(("status error", "Region not found.".to_string())),
        ViewState::Ready(_) => None,
    }
}

/// Steps of the offline pipeline that produced the dataset, as shown on the page.
pub const METHODOLOGY: [(&str, &str); 7] = [
    (
        "Standardization",
        "Raw gene expression data (15,636 genes × 3,446 brain regions) was standardized \
         to zero mean and unit variance across regions.",
    ),
    (
        "Dimensionality Reduction",
        "PCA reduced the input while preserving about 86% of the variance, leaving \
         128 principal components per region.",
    ),
    (
        "Graph Autoencoder",
        "A neural network compressed each region's PCA vector into a 64-dimensional \
         latent space h and reconstructed the input from it.",
    ),
    (
        "Adjacency Matrix",
        "A soft connectivity matrix A_pred = sigmoid(h · hᵀ) scores the similarity \
         between every pair of region embeddings.",
    ),
    (
        "Clustering",
        "Spectral clustering on A_pred grouped regions into 8 functionally similar \
         transcriptomic modules.",
    ),
    (
        "Visualization",
        "Each region is placed at its MNI coordinates. Edges join strongly connected \
         regions and are coloured by strength on the Plasma gradient.",
    ),
    (
        "Interactive Explorer",
        "Selecting a region shows only its most meaningful transcriptomic connections.",
    ),
];


// browser-side checks, run with wasm-pack test --headless
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use brain_graph::{LoadState, RegionForm};
    use wasm_bindgen_test::*;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_unloaded_shows_loading() {
        let state = LoadState::default();
        assert_eq!(
            status_line(&state.view(0)).map(|(_, t)| t),
            Some("Loading data...".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn wasm_form_clamps() {
        let mut form = RegionForm::default();
        form.set_input("5000");
        assert_eq!(form.submit(), 3445);
    }
}
