use crate::dataset::RegionId;
use thiserror::Error;

/// Errors raised while fetching, decompressing or validating the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Dataset request returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to decompress dataset: {0}")]
    Decompress(#[from] std::io::Error),

    #[error("Dataset payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid region key {0:?}: expected a non-negative integer")]
    InvalidRegionKey(String),

    #[error("Region {region} connects to unknown region {target}")]
    DanglingConnection { region: RegionId, target: RegionId },
}

/// Errors raised while building the chart for a selected region
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("Region {0} not found")]
    RegionNotFound(RegionId),

    #[error("Region {region} connects to unknown region {target}")]
    DanglingTarget { region: RegionId, target: RegionId },
}

/// Convenience type alias for Results using DatasetError
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Convenience type alias for Results using ChartError
pub type ChartResult<T> = Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display() {
        let err = DatasetError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "Dataset request returned HTTP status 404");
    }

    #[test]
    fn dangling_connection_display() {
        let err = DatasetError::DanglingConnection {
            region: 3,
            target: 9000,
        };
        let msg = err.to_string();
        assert!(msg.contains("Region 3"));
        assert!(msg.contains("unknown region 9000"));
    }

    #[test]
    fn invalid_key_display() {
        let err = DatasetError::InvalidRegionKey("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid region key \"abc\": expected a non-negative integer"
        );
    }

    #[test]
    fn error_conversion_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt deflate stream");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Decompress(_)));
        assert!(err.to_string().contains("corrupt deflate stream"));
    }

    #[test]
    fn error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DatasetError = json_err.into();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn region_not_found_display() {
        assert_eq!(
            ChartError::RegionNotFound(12).to_string(),
            "Region 12 not found"
        );
    }
}
