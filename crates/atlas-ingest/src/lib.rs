//! Dataset processors for the atlas demo shell.
//!
//! This crate turns a fetched response body into a dataset the map engine
//! can merge:
//!
//! - **Classification**: pick the processor from the declared source URL
//! - **Tabular**: delimited text into a typed row table
//! - **Geospatial**: GeoJSON into a feature collection
//! - **Saved configs**: version-checked configuration envelopes
//! - **Ids**: caller-supplied or generated base-36 dataset ids

mod classify;
mod config;
mod error;
mod geojson;
mod id;
mod tabular;

use atlas_model::DatasetData;

pub use classify::{ProcessorKind, classify_data_url};
pub use config::{SUPPORTED_CONFIG_VERSIONS, parse_saved_config};
pub use error::{IngestError, Result};
pub use geojson::parse_geojson;
pub use id::{GENERATED_ID_LEN, generate_dataset_id, resolve_dataset_id};
pub use tabular::parse_tabular;

/// Runs the selected processor over a response body.
pub fn process_response(kind: ProcessorKind, raw: &str) -> Result<DatasetData> {
    match kind {
        ProcessorKind::Tabular => parse_tabular(raw).map(DatasetData::Tabular),
        ProcessorKind::Geospatial => parse_geojson(raw).map(DatasetData::Geospatial),
    }
}
