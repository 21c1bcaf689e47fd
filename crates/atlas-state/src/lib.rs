//! Composed state-transition layer for the atlas demo shell.
//!
//! Three cooperating state slices — app workflow state, cloud-sharing
//! state, and an opaque external map-engine state — are driven by one
//! tagged event vocabulary through a composed root reducer. A single
//! event, the resolved remote fetch, runs a cross-slice ingestion updater
//! instead of the per-slice reducers: it classifies and parses the fetched
//! file, wraps it into a dataset record, and asks the map engine to merge
//! it.
//!
//! Collaborators (provider handlers, token storage) are injected through
//! [`ReducerContext`]; the engine is consumed through the [`MapEngine`]
//! trait.

mod app_reducer;
mod composed;
mod context;
mod engine;
mod error;
mod event;
mod sharing_reducer;
mod store;

pub use app_reducer::reduce_app;
pub use composed::{AggregateState, ComposedReducer};
pub use context::ReducerContext;
pub use engine::{AddDataPayload, EngineError, MapEngine};
pub use error::ReduceError;
pub use event::{Event, IngestionEvent, IngestionOptions};
pub use sharing_reducer::{AUTHENTICATION_FAILED, reduce_sharing};
pub use store::Store;
