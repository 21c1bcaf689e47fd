//! Error types for the reducer layer.

use atlas_ingest::IngestError;
use thiserror::Error;

use crate::engine::EngineError;

/// Failures raised while ingesting a remote dataset.
///
/// These never unwind through the dispatch loop; the composed reducer
/// converts them into a state-carried error on the app slice.
#[derive(Debug, Error)]
pub enum ReduceError {
    /// The fetched response could not be parsed into a dataset.
    #[error("failed to process dataset from {data_url}: {source}")]
    DatasetProcessing {
        data_url: String,
        #[source]
        source: IngestError,
    },

    /// The accompanying saved configuration could not be parsed.
    #[error("failed to parse saved configuration: {source}")]
    SavedConfig {
        #[source]
        source: IngestError,
    },

    /// The engine refused the merged dataset.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
