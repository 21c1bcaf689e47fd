//! Processor selection from a dataset's source URL.

use tracing::debug;

/// Parsing strategy for a fetched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    /// Delimited text (CSV and friends).
    Tabular,
    /// GeoJSON document.
    Geospatial,
}

/// Chooses a processor from the declared source URL.
///
/// This is a substring sniff on the extension, not content sniffing:
/// anything mentioning `.json` or `.geojson` goes to the geospatial
/// processor, everything else defaults to tabular. A URL like
/// `data.json.csv` therefore classifies as geospatial.
pub fn classify_data_url(data_url: &str) -> ProcessorKind {
    let kind = if data_url.contains(".json") || data_url.contains(".geojson") {
        ProcessorKind::Geospatial
    } else {
        ProcessorKind::Tabular
    };
    debug!(data_url, ?kind, "classified data url");
    kind
}
