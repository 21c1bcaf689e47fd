//! The event vocabulary of the composed store.
//!
//! One tagged union instead of string-keyed action maps: the ingestion
//! variant is structurally distinct from the per-slice events, and the
//! map-engine passthrough variant carries the engine's own event type.

use atlas_model::{ErrorInfo, FileMetadata, LoadingMethodId, SampleMapDescriptor};
use serde_json::Value;

/// Options accompanying a remote-fetch success.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionOptions {
    /// Dataset id to assign; a fresh id is generated when absent or empty.
    pub id: Option<String>,
    /// Source URL the response was fetched from; drives processor choice.
    pub data_url: String,
}

/// Payload of a resolved remote fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionEvent {
    /// Raw response body.
    pub response: String,
    pub options: IngestionOptions,
    /// Saved map configuration fetched alongside the dataset.
    pub config: Option<Value>,
}

/// Events understood by the composed root reducer.
///
/// `E` is the map engine's own event type; `Engine` events pass through to
/// it untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<E> {
    /// Shell finished booting.
    Init,
    /// User picked a loading method from the fixed catalog.
    SetLoadingMethod(LoadingMethodId),
    /// Sample-map catalog finished loading.
    LoadMapSampleFile(Vec<SampleMapDescriptor>),
    /// Toggle the sample-map spinner.
    SetSampleLoadingStatus(bool),
    /// A provider auth flow finished; validate and persist its credential.
    SetAuthToken { provider: String },
    /// Another window changed persisted credentials; re-read them all.
    PropagateStorageEvent,
    /// A file push to a provider started or finished.
    PushingFile {
        is_loading: bool,
        metadata: FileMetadata,
    },
    /// A remote dataset fetch resolved; runs the cross-slice ingestion
    /// updater instead of the per-slice reducers.
    RemoteFileDataSuccess(IngestionEvent),
    /// A remote resource fetch failed. No producer dispatches this today;
    /// the handler is kept for the sharing slice's error display.
    RemoteResourceError { error: ErrorInfo, url: String },
    /// Passthrough to the map engine's reducer.
    Engine(E),
}
