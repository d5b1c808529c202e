use crate::dataset::{Dataset, Region};
use crate::error::DatasetResult;
use flate2::read::MultiGzDecoder;
use std::collections::BTreeMap;
use std::io::Read;

/// Decompress a gzip blob and parse it into a validated [`Dataset`].
///
/// Concatenated gzip members are decoded back to back. Bytes after the last
/// member that do not start another member are an error.
pub fn decode_dataset(bytes: &[u8]) -> DatasetResult<Dataset> {
    let mut raw = Vec::new();
    MultiGzDecoder::new(bytes).read_to_end(&mut raw)?;
    let text = String::from_utf8(raw)?;
    tracing::debug!(
        compressed = bytes.len(),
        decompressed = text.len(),
        "Dataset decompressed"
    );
    parse_dataset(&text)
}

/// Parse an already decompressed JSON payload.
pub fn parse_dataset(text: &str) -> DatasetResult<Dataset> {
    let raw: BTreeMap<String, Region> = serde_json::from_str(text)?;
    let dataset = Dataset::from_raw(raw)?;
    tracing::debug!(regions = dataset.len(), "Dataset parsed");
    Ok(dataset)
}
