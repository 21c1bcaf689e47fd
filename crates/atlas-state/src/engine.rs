//! Contract of the external map engine.
//!
//! The engine's state and reducer internals are opaque to this layer; it
//! is consumed through this trait only.

use atlas_model::{DatasetRecord, SavedConfig};
use thiserror::Error;

use crate::event::Event;

/// Payload of the engine's "add dataset to map" operation.
#[derive(Debug, Clone, PartialEq)]
pub struct AddDataPayload {
    pub datasets: Vec<DatasetRecord>,
    pub config: Option<SavedConfig>,
}

/// Opaque failure reported by the map engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("map engine error: {0}")]
pub struct EngineError(pub String);

/// The external map-visualization engine, as consumed by this layer.
pub trait MapEngine {
    /// Engine-internal state; the composed store carries it untouched.
    type State: Clone;
    /// Engine-internal event type, delivered via [`Event::Engine`].
    type Event;

    fn initial_state(&self) -> Self::State;

    /// The engine's reducer. Every dispatched event is passed through,
    /// engine-internal or not; the engine ignores what it does not know.
    fn reduce(&self, state: &Self::State, event: &Event<Self::Event>) -> Self::State;

    /// Merges freshly ingested datasets (and an optional saved
    /// configuration) into map state.
    fn add_data_to_map(
        &self,
        state: &Self::State,
        payload: AddDataPayload,
    ) -> Result<Self::State, EngineError>;
}
