//! Shared state and dataset types for the atlas demo shell.
//!
//! This crate holds the plain-data vocabulary shared by the reducer layer
//! and the ingestion layer: the app and sharing state slices, the fixed
//! loading-method catalog, sample-map catalog entries, and the dataset
//! records handed to the map engine.

pub mod app;
pub mod dataset;
pub mod methods;
pub mod samples;
pub mod sharing;
pub mod types;

pub use app::{APP_NAME, AppState};
pub use dataset::{
    DatasetData, DatasetInfo, DatasetRecord, Feature, FeatureCollection, FieldDescriptor,
    FieldType, SavedConfig, TableData,
};
pub use methods::{
    DEFAULT_LOADING_METHOD, LOADING_METHODS, LoadingMethod, LoadingMethodId, MethodOption,
    default_loading_method, loading_method,
};
pub use samples::SampleMapDescriptor;
pub use sharing::{FileMetadata, SharingState, SharingStatus};
pub use types::{ErrorInfo, Token};
