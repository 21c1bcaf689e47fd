//! The composed root reducer and the remote-data ingestion updater.

use atlas_ingest::{classify_data_url, parse_saved_config, process_response, resolve_dataset_id};
use atlas_model::{AppState, DatasetInfo, DatasetRecord, ErrorInfo, SharingState};
use tracing::{info, warn};

use crate::app_reducer::reduce_app;
use crate::context::ReducerContext;
use crate::engine::{AddDataPayload, MapEngine};
use crate::error::ReduceError;
use crate::event::{Event, IngestionEvent};
use crate::sharing_reducer::reduce_sharing;

/// The aggregate state tree: the opaque map-engine slice plus the two
/// shell-owned slices.
///
/// Owned exclusively by the composed reducer; sub-reducers see only their
/// slice, and the ingestion updater is the sole cross-slice writer.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateState<S> {
    pub map_engine: S,
    pub app: AppState,
    pub sharing: SharingState,
}

/// Merges the app, sharing, and map-engine reducers into one
/// state-transition function, special-casing the ingestion event.
pub struct ComposedReducer<M: MapEngine> {
    context: ReducerContext,
    engine: M,
}

impl<M: MapEngine> ComposedReducer<M> {
    pub fn new(context: ReducerContext, engine: M) -> Self {
        Self { context, engine }
    }

    pub fn context(&self) -> &ReducerContext {
        &self.context
    }

    pub fn initial_state(&self) -> AggregateState<M::State> {
        AggregateState {
            map_engine: self.engine.initial_state(),
            app: AppState::initial(),
            sharing: SharingState::initial(),
        }
    }

    /// Applies one event and returns the next aggregate state.
    ///
    /// Two-tier dispatch: the ingestion event runs the cross-slice updater
    /// and bypasses the sub-reducers entirely; everything else fans out to
    /// the three slice reducers. Ingestion failures become a state-carried
    /// error on the app slice — nothing unwinds through the dispatch loop.
    pub fn reduce(
        &self,
        state: &AggregateState<M::State>,
        event: &Event<M::Event>,
    ) -> AggregateState<M::State> {
        if let Event::RemoteFileDataSuccess(ingestion) = event {
            return match self.ingest(state, ingestion) {
                Ok(next) => next,
                Err(error) => {
                    warn!(data_url = %ingestion.options.data_url, %error, "ingestion failed");
                    AggregateState {
                        map_engine: state.map_engine.clone(),
                        app: AppState {
                            is_map_loading: false,
                            error: Some(ErrorInfo::message(error.to_string())),
                            ..state.app.clone()
                        },
                        sharing: state.sharing.clone(),
                    }
                }
            };
        }

        AggregateState {
            map_engine: self.engine.reduce(&state.map_engine, event),
            app: reduce_app(&state.app, event),
            sharing: reduce_sharing(&state.sharing, event, &self.context),
        }
    }

    /// Builds a dataset record from a resolved remote fetch and asks the
    /// engine to merge it into map state.
    fn ingest(
        &self,
        state: &AggregateState<M::State>,
        event: &IngestionEvent,
    ) -> Result<AggregateState<M::State>, ReduceError> {
        let dataset_id = resolve_dataset_id(event.options.id.as_deref());
        let kind = classify_data_url(&event.options.data_url);
        let data = process_response(kind, &event.response).map_err(|source| {
            ReduceError::DatasetProcessing {
                data_url: event.options.data_url.clone(),
                source,
            }
        })?;

        let datasets = vec![DatasetRecord {
            info: DatasetInfo::with_id(dataset_id.as_str()),
            data,
        }];
        let config = event
            .config
            .as_ref()
            .map(parse_saved_config)
            .transpose()
            .map_err(|source| ReduceError::SavedConfig { source })?;

        info!(%dataset_id, ?kind, "merging remote dataset into map state");
        let map_engine = self
            .engine
            .add_data_to_map(&state.map_engine, AddDataPayload { datasets, config })?;

        Ok(AggregateState {
            map_engine,
            app: AppState {
                // The fetch resolved; the spinner must not be left running.
                is_map_loading: false,
                ..state.app.clone()
            },
            sharing: state.sharing.clone(),
        })
    }
}
