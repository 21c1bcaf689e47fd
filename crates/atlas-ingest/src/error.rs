//! Error types for dataset processing.

use thiserror::Error;

/// Errors that can occur while turning a fetched response into a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Tabular ===
    /// Response body has no content.
    #[error("response body is empty")]
    EmptyResponse,

    /// Delimited text has a header row but no data rows.
    #[error("table has no data rows")]
    NoRows,

    /// Header row contains an unnamed column.
    #[error("unnamed column at index {index} in header row")]
    UnnamedColumn { index: usize },

    /// Failed to parse delimited text.
    #[error("failed to parse delimited text: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    // === Geospatial ===
    /// Response is not valid JSON.
    #[error("failed to parse JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// JSON parsed but is not a usable GeoJSON document.
    #[error("not a GeoJSON FeatureCollection or Feature: {reason}")]
    InvalidGeoJson { reason: String },

    // === Saved configuration ===
    /// Saved configuration lacks the version envelope.
    #[error("saved configuration has no version field")]
    MissingConfigVersion,

    /// Saved configuration declares a version this layer cannot read.
    #[error("unsupported saved configuration version: {version}")]
    UnsupportedConfigVersion { version: String },

    /// Saved configuration has a version but no config body.
    #[error("saved configuration has no config body")]
    MissingConfigBody,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = IngestError::UnsupportedConfigVersion {
            version: "v9".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported saved configuration version: v9");
    }
}
