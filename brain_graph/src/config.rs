use crate::region_input::MAX_REGION_INDEX;
use serde::Deserialize;

/// Location of the precomputed, gzip-compressed connectivity dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://kxufiygkshxnq834.public.blob.vercel-storage.com/brain_graph.json.gz";

/// Viewer settings. Every field has a default, so partial documents deserialize.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub data_url: String,
    pub max_region: u32,
    pub marker_size: f64,
    pub edge_width: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            max_region: MAX_REGION_INDEX,
            marker_size: 4.0,
            edge_width: 2.0,
        }
    }
}

impl ViewerConfig {
    /// Defaults, with the dataset URL replaced when `url` is set.
    pub fn with_data_url(url: Option<&str>) -> Self {
        match url {
            Some(u) if !u.trim().is_empty() => Self {
                data_url: u.trim().to_string(),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.data_url, DEFAULT_DATA_URL);
        assert_eq!(cfg.max_region, 3445);
        assert_eq!(cfg.marker_size, 4.0);
        assert_eq!(cfg.edge_width, 2.0);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg: ViewerConfig =
            serde_json::from_str(r#"{"data_url":"http://localhost:8080/g.json.gz"}"#).unwrap();
        assert_eq!(cfg.data_url, "http://localhost:8080/g.json.gz");
        assert_eq!(cfg.max_region, MAX_REGION_INDEX);
    }

    #[test]
    fn url_override() {
        assert_eq!(ViewerConfig::with_data_url(None).data_url, DEFAULT_DATA_URL);
        assert_eq!(
            ViewerConfig::with_data_url(Some("  ")).data_url,
            DEFAULT_DATA_URL
        );
        assert_eq!(
            ViewerConfig::with_data_url(Some("http://x/y.gz")).data_url,
            "http://x/y.gz"
        );
    }
}
