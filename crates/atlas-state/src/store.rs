//! The dispatch loop that owns the aggregate state.

use crate::composed::{AggregateState, ComposedReducer};
use crate::engine::MapEngine;
use crate::event::Event;

/// Single-threaded, event-at-a-time store.
///
/// The store exclusively owns the aggregate state: each dispatched event
/// is reduced to completion before the next is accepted, and readers only
/// ever see the snapshot left behind by a finished transition. Callers
/// running fetches asynchronously must dispatch the ingestion event only
/// after the fetch has fully resolved.
pub struct Store<M: MapEngine> {
    reducer: ComposedReducer<M>,
    state: AggregateState<M::State>,
}

impl<M: MapEngine> Store<M> {
    pub fn new(reducer: ComposedReducer<M>) -> Self {
        let state = reducer.initial_state();
        Self { reducer, state }
    }

    /// Runs one event through the composed reducer and replaces the
    /// snapshot.
    pub fn dispatch(&mut self, event: Event<M::Event>) -> &AggregateState<M::State> {
        self.state = self.reducer.reduce(&self.state, &event);
        &self.state
    }

    /// The snapshot left by the last completed transition.
    pub fn state(&self) -> &AggregateState<M::State> {
        &self.state
    }
}
